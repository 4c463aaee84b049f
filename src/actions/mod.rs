//! Team actions
//!
//! Each action performs one change to teams or memberships through the
//! repository ports. Handlers run their guard checks first and only then
//! hand over to an action.

pub mod create_team;
pub mod error;
pub mod join_team;
pub mod leave_team;
pub mod update_team;

pub use create_team::{CreateTeamAction, NewTeam};
pub use error::{ActionError, ActionResult};
pub use join_team::JoinTeamAction;
pub use leave_team::LeaveTeamAction;
pub use update_team::UpdateTeamAction;
