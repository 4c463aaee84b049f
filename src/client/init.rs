use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::team_type::TeamType;

/// Team as the client keeps it; extra fields in responses are ignored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSummary {
    pub id: Uuid,
    pub name: String,
    pub identifier: String,
    pub leader: Uuid,
    pub members: i32,
}

/// Signed-in user as the client sees them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSnapshot {
    pub id: Uuid,
    pub name: String,
    pub remaining_teams: i32,
}

/// Client-side state of the "user" store module
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserState {
    pub auth: bool,
    pub user: Option<UserSnapshot>,
    pub teams: Vec<TeamSummary>,
    pub active_team: Option<TeamSummary>,
    pub team_types: Vec<TeamType>,
}

/// Initial state: signed out, no teams
pub fn init() -> UserState {
    UserState::default()
}
