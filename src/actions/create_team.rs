use std::sync::Arc;

use crate::domain::repositories::UnitOfWork;
use crate::domain::team::{Team, TeamIdentifier, TeamName};
use crate::domain::team_type::TeamType;
use crate::domain::user::User;

use super::error::{ActionError, ActionResult};

/// Validated input for a new team
#[derive(Debug, Clone)]
pub struct NewTeam {
    pub name: TeamName,
    pub identifier: TeamIdentifier,
    pub team_type: TeamType,
}

/// Action to create a team led by the acting user.
///
/// This action, in one transaction:
/// 1. Uses up one of the user's remaining team slots
/// 2. Stores the team with the user as leader and first member
/// 3. Makes the new team the user's active team if they had none
pub struct CreateTeamAction {
    uow: Arc<dyn UnitOfWork>,
}

impl CreateTeamAction {
    pub fn new(uow: Arc<dyn UnitOfWork>) -> Self {
        Self { uow }
    }

    /// Creates the team and updates `user` once the transaction commits
    ///
    /// # Returns
    /// - `Ok(team)` - The stored team
    /// - `Err(ActionError::NoRemainingTeams)` - The user has no slots left
    #[tracing::instrument(name = "create_team", skip_all, fields(user_id = %user.id), err)]
    pub async fn run(&self, user: &mut User, input: NewTeam) -> ActionResult<Team> {
        let mut creator = user.clone();
        creator
            .consume_team_slot()
            .map_err(|_| ActionError::NoRemainingTeams)?;

        let (team, events) = Team::new(input.name, input.identifier, &input.team_type, creator.id);
        creator.activate_team_if_none(team.id());

        let mut tx = self.uow.begin().await?;
        tx.create_team(&team).await?;
        tx.add_member(team.id(), creator.id).await?;
        tx.save_user(&creator).await?;
        tx.commit().await?;

        *user = creator;
        for event in &events {
            event.record();
        }

        Ok(team)
    }
}
