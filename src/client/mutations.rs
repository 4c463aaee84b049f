use uuid::Uuid;

use super::init::{init, TeamSummary, UserSnapshot, UserState};
use crate::domain::team_type::TeamType;

/// Synchronous state changes for the user store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserMutation {
    Login(UserSnapshot),
    Logout,
    SetTeams(Vec<TeamSummary>),
    /// Append, or replace when a team with the same id is already held
    AddTeam(TeamSummary),
    ReplaceTeam(TeamSummary),
    RemoveTeam(Uuid),
    SetActiveTeam(Option<TeamSummary>),
    /// The signed-in user spent one of their remaining team slots
    UseTeamSlot,
    ActivateTeamIfNone(TeamSummary),
    SetTeamTypes(Vec<TeamType>),
}

pub fn apply(state: &mut UserState, mutation: UserMutation) {
    match mutation {
        UserMutation::Login(user) => {
            state.auth = true;
            state.user = Some(user);
        }
        UserMutation::Logout => *state = init(),
        UserMutation::SetTeams(teams) => state.teams = teams,
        UserMutation::AddTeam(team) => {
            match state.teams.iter_mut().find(|t| t.id == team.id) {
                Some(existing) => *existing = team,
                None => state.teams.push(team),
            }
        }
        UserMutation::ReplaceTeam(team) => {
            if state.active_team.as_ref().is_some_and(|t| t.id == team.id) {
                state.active_team = Some(team.clone());
            }
            if let Some(existing) = state.teams.iter_mut().find(|t| t.id == team.id) {
                *existing = team;
            }
        }
        UserMutation::RemoveTeam(team_id) => state.teams.retain(|t| t.id != team_id),
        UserMutation::SetActiveTeam(team) => state.active_team = team,
        UserMutation::UseTeamSlot => {
            if let Some(user) = state.user.as_mut() {
                user.remaining_teams = (user.remaining_teams - 1).max(0);
            }
        }
        UserMutation::ActivateTeamIfNone(team) => {
            if state.active_team.is_none() {
                state.active_team = Some(team);
            }
        }
        UserMutation::SetTeamTypes(types) => state.team_types = types,
    }
}
