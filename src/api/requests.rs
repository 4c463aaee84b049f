//! Request bodies for the team endpoints and their validation
//!
//! Format rules come from the domain value objects; uniqueness and
//! existence rules need the repositories and are checked here.

use serde::Deserialize;
use uuid::Uuid;

use crate::actions::NewTeam;
use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::team::{Team, TeamIdentifier, TeamName};

#[derive(Debug, Deserialize)]
pub struct CreateTeamRequest {
    pub name: String,
    pub identifier: String,
    #[serde(rename = "teamType")]
    pub team_type: i32,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTeamRequest {
    pub name: String,
    pub identifier: String,
}

#[derive(Debug, Deserialize)]
pub struct JoinTeamRequest {
    pub identifier: String,
}

#[derive(Debug, Deserialize)]
pub struct LeaveTeamRequest {
    pub team_id: Uuid,
}

impl CreateTeamRequest {
    pub async fn validate(self, state: &AppState) -> Result<NewTeam, ApiError> {
        let (name, identifier) = validate_details(state, &self.name, &self.identifier, None).await?;

        let team_type = state
            .team_types
            .find_by_id(self.team_type)
            .await?
            .ok_or_else(|| ApiError::unprocessable("The selected team type is invalid"))?;

        Ok(NewTeam {
            name,
            identifier,
            team_type,
        })
    }
}

impl UpdateTeamRequest {
    /// Validates against every team except `team` itself
    pub async fn validate(
        self,
        state: &AppState,
        team: &Team,
    ) -> Result<(TeamName, TeamIdentifier), ApiError> {
        validate_details(state, &self.name, &self.identifier, Some(team)).await
    }
}

impl JoinTeamRequest {
    /// Resolves the team the identifier points at
    pub async fn resolve(self, state: &AppState) -> Result<Team, ApiError> {
        let identifier = self.identifier.trim();
        if identifier.is_empty() {
            return Err(ApiError::unprocessable("The identifier field is required"));
        }

        state
            .teams
            .find_by_identifier(identifier)
            .await?
            .ok_or_else(|| ApiError::not_found("No team matches that identifier"))
    }
}

async fn validate_details(
    state: &AppState,
    name: &str,
    identifier: &str,
    ignore: Option<&Team>,
) -> Result<(TeamName, TeamIdentifier), ApiError> {
    let name = TeamName::new(name).map_err(ApiError::unprocessable)?;
    let identifier = TeamIdentifier::new(identifier).map_err(ApiError::unprocessable)?;
    let ignored_id = ignore.map(Team::id);

    let taken = |found: Option<Team>| found.is_some_and(|t| Some(t.id()) != ignored_id);

    if taken(state.teams.find_by_name(name.as_str()).await?) {
        return Err(ApiError::unprocessable("The name has already been taken"));
    }
    if taken(state.teams.find_by_identifier(identifier.as_str()).await?) {
        return Err(ApiError::unprocessable(
            "The identifier has already been taken",
        ));
    }

    Ok((name, identifier))
}
