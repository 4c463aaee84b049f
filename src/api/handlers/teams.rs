use axum::extract::State;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::actions::{
    ActionError, CreateTeamAction, JoinTeamAction, LeaveTeamAction, UpdateTeamAction,
};
use crate::api::envelope::{Envelope, Failure};
use crate::api::errors::ApiError;
use crate::api::extract::{ApiJson, ApiPath};
use crate::api::middleware::CurrentUser;
use crate::api::requests::{CreateTeamRequest, JoinTeamRequest, LeaveTeamRequest, UpdateTeamRequest};
use crate::api::state::AppState;
use crate::domain::team::Team;
use crate::domain::team_type::TeamType;

/// JSON view of a team
#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub id: Uuid,
    pub name: String,
    pub identifier: String,
    pub type_id: i32,
    pub type_name: String,
    pub leader: Uuid,
    pub created_by: Uuid,
    pub members: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id(),
            name: team.name().to_string(),
            identifier: team.identifier().to_string(),
            type_id: team.type_id(),
            type_name: team.type_name().to_string(),
            leader: team.leader(),
            created_by: team.created_by(),
            members: team.members(),
            created_at: team.created_at(),
            updated_at: team.updated_at(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TeamsPayload {
    pub teams: Vec<TeamResponse>,
}

#[derive(Debug, Serialize)]
pub struct TeamPayload {
    pub team: TeamResponse,
}

/// Team state after a join or leave
#[derive(Debug, Serialize)]
pub struct MembershipPayload {
    pub team: TeamResponse,
    #[serde(rename = "activeTeam")]
    pub active_team: Option<TeamResponse>,
}

#[derive(Debug, Serialize)]
pub struct TypesPayload {
    pub types: Vec<TeamType>,
}

/// Teams the user has joined
///
/// GET /api/teams/list
pub async fn list(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Envelope<TeamsPayload>, ApiError> {
    let teams = state.teams.find_for_user(user.id).await?;

    Ok(Envelope::success(TeamsPayload {
        teams: teams.iter().map(TeamResponse::from).collect(),
    }))
}

/// Create a new team led by the user
///
/// POST /api/teams/create
pub async fn create(
    State(state): State<AppState>,
    CurrentUser(mut user): CurrentUser,
    ApiJson(req): ApiJson<CreateTeamRequest>,
) -> Result<Envelope<TeamPayload>, ApiError> {
    let input = req.validate(&state).await?;

    if !user.can_create_team() {
        return Ok(Envelope::fail(Failure::MaxTeamsCreated));
    }

    let action = CreateTeamAction::new(state.unit_of_work.clone());
    match action.run(&mut user, input).await {
        Ok(team) => Ok(Envelope::success(TeamPayload {
            team: TeamResponse::from(&team),
        })),
        Err(ActionError::NoRemainingTeams) => Ok(Envelope::fail(Failure::MaxTeamsCreated)),
        Err(e) => Err(e.into()),
    }
}

/// Rename a team; leader only
///
/// PATCH /api/teams/update/:team
pub async fn update(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ApiPath(team_id): ApiPath<Uuid>,
    ApiJson(req): ApiJson<UpdateTeamRequest>,
) -> Result<Envelope<TeamPayload>, ApiError> {
    let team = find_team(&state, team_id).await?;
    let (name, identifier) = req.validate(&state, &team).await?;

    if !team.is_led_by(user.id) {
        return Ok(Envelope::fail(Failure::MemberNotAllowed));
    }

    let team = UpdateTeamAction::new(state.teams.clone())
        .run(team, name, identifier)
        .await?;

    Ok(Envelope::success(TeamPayload {
        team: TeamResponse::from(&team),
    }))
}

/// Join a team by its identifier
///
/// POST /api/teams/join
pub async fn join(
    State(state): State<AppState>,
    CurrentUser(mut user): CurrentUser,
    ApiJson(req): ApiJson<JoinTeamRequest>,
) -> Result<Envelope<MembershipPayload>, ApiError> {
    let mut team = req.resolve(&state).await?;

    if state.teams.is_member(team.id(), user.id).await? {
        return Ok(Envelope::fail(Failure::AlreadyAMember));
    }

    JoinTeamAction::new(state.unit_of_work.clone())
        .run(&mut user, &mut team)
        .await?;

    Ok(Envelope::success(
        membership_payload(&state, team.id(), user.id).await?,
    ))
}

/// Leave a team; the last member cannot leave
///
/// POST /api/teams/leave
pub async fn leave(
    State(state): State<AppState>,
    CurrentUser(mut user): CurrentUser,
    ApiJson(req): ApiJson<LeaveTeamRequest>,
) -> Result<Envelope<MembershipPayload>, ApiError> {
    if !state.teams.is_member(req.team_id, user.id).await? {
        return Ok(Envelope::fail(Failure::NotAMember));
    }

    let mut team = find_team(&state, req.team_id).await?;

    if state.teams.member_count(team.id()).await? <= 1 {
        return Ok(Envelope::fail(Failure::YouAreLastMember));
    }

    LeaveTeamAction::new(state.teams.clone(), state.unit_of_work.clone())
        .run(&mut user, &mut team)
        .await?;

    Ok(Envelope::success(
        membership_payload(&state, team.id(), user.id).await?,
    ))
}

/// Available team types; no authentication needed
///
/// GET /api/teams/get-types
pub async fn types(State(state): State<AppState>) -> Result<Envelope<TypesPayload>, ApiError> {
    let types = state.team_types.all().await?;

    Ok(Envelope::success(TypesPayload { types }))
}

async fn find_team(state: &AppState, team_id: Uuid) -> Result<Team, ApiError> {
    state
        .teams
        .find_by_id(team_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Team not found: {}", team_id)))
}

/// Re-reads the team and the user's active team after a membership change
async fn membership_payload(
    state: &AppState,
    team_id: Uuid,
    user_id: Uuid,
) -> Result<MembershipPayload, ApiError> {
    let team = find_team(state, team_id).await?;

    let active_team = match state.users.find_by_id(user_id).await? {
        Some(user) => match user.active_team {
            Some(active_id) => state.teams.find_by_id(active_id).await?,
            None => None,
        },
        None => None,
    };

    Ok(MembershipPayload {
        team: TeamResponse::from(&team),
        active_team: active_team.as_ref().map(TeamResponse::from),
    })
}
