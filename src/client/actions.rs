use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use super::init::TeamSummary;
use super::mutations::UserMutation;
use crate::domain::team_type::TeamType;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered `{success: false, message}`
    #[error("request refused: {0}")]
    Refused(String),

    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Team endpoints whose responses the store understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamsEndpoint {
    List,
    Create,
    Update,
    Join,
    Leave,
    Types,
}

#[derive(Deserialize)]
struct RawEnvelope {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(flatten)]
    payload: Map<String, Value>,
}

/// Turns a Teams API response body into the mutations it implies
pub fn mutations_for(
    endpoint: TeamsEndpoint,
    body: &Value,
) -> Result<Vec<UserMutation>, ClientError> {
    let envelope = RawEnvelope::deserialize(body)?;
    if !envelope.success {
        return Err(ClientError::Refused(envelope.message.unwrap_or_default()));
    }
    let payload = envelope.payload;

    let mutations = match endpoint {
        TeamsEndpoint::List => vec![UserMutation::SetTeams(field(&payload, "teams")?)],
        TeamsEndpoint::Create => {
            let team: TeamSummary = field(&payload, "team")?;
            vec![
                UserMutation::AddTeam(team.clone()),
                UserMutation::UseTeamSlot,
                UserMutation::ActivateTeamIfNone(team),
            ]
        }
        TeamsEndpoint::Update => vec![UserMutation::ReplaceTeam(field(&payload, "team")?)],
        TeamsEndpoint::Join => vec![
            UserMutation::AddTeam(field(&payload, "team")?),
            UserMutation::SetActiveTeam(field(&payload, "activeTeam")?),
        ],
        TeamsEndpoint::Leave => {
            let team: TeamSummary = field(&payload, "team")?;
            vec![
                UserMutation::RemoveTeam(team.id),
                UserMutation::SetActiveTeam(field(&payload, "activeTeam")?),
            ]
        }
        TeamsEndpoint::Types => {
            let types: Vec<TeamType> = field(&payload, "types")?;
            vec![UserMutation::SetTeamTypes(types)]
        }
    };

    Ok(mutations)
}

/// Missing keys deserialise from `null`, so optional fields may be absent
fn field<T: DeserializeOwned>(payload: &Map<String, Value>, key: &str) -> Result<T, ClientError> {
    let value = payload.get(key).cloned().unwrap_or(Value::Null);
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::init::{init, UserSnapshot};
    use crate::client::mutations::apply;
    use serde_json::json;
    use uuid::Uuid;

    fn team_json(id: Uuid) -> Value {
        json!({
            "id": id,
            "name": "Beach Crew",
            "identifier": "beach",
            "type_id": 1,
            "type_name": "community",
            "leader": Uuid::new_v4(),
            "created_by": Uuid::new_v4(),
            "members": 2,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        })
    }

    #[test]
    fn refused_response_yields_code() {
        let body = json!({ "success": false, "message": "already-a-member" });

        match mutations_for(TeamsEndpoint::Join, &body) {
            Err(ClientError::Refused(code)) => assert_eq!(code, "already-a-member"),
            other => panic!("expected refusal, got {:?}", other),
        }
    }

    #[test]
    fn join_adds_team_and_sets_active() {
        let id = Uuid::new_v4();
        let body = json!({ "success": true, "team": team_json(id), "activeTeam": team_json(id) });

        let mutations = mutations_for(TeamsEndpoint::Join, &body).unwrap();

        assert_eq!(mutations.len(), 2);
        assert!(matches!(&mutations[0], UserMutation::AddTeam(t) if t.id == id));
        assert!(matches!(&mutations[1], UserMutation::SetActiveTeam(Some(t)) if t.id == id));
    }

    #[test]
    fn create_adds_team_uses_slot_and_activates() {
        let id = Uuid::new_v4();
        let body = json!({ "success": true, "team": team_json(id) });

        let mutations = mutations_for(TeamsEndpoint::Create, &body).unwrap();

        assert_eq!(mutations.len(), 3);
        assert!(matches!(&mutations[0], UserMutation::AddTeam(t) if t.id == id));
        assert_eq!(mutations[1], UserMutation::UseTeamSlot);
        assert!(matches!(&mutations[2], UserMutation::ActivateTeamIfNone(t) if t.id == id));
    }

    #[test]
    fn create_response_updates_signed_in_user() {
        let mut state = init();
        apply(
            &mut state,
            UserMutation::Login(UserSnapshot {
                id: Uuid::new_v4(),
                name: "Robin".to_string(),
                remaining_teams: 2,
            }),
        );
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();

        for id in [first, second] {
            let body = json!({ "success": true, "team": team_json(id) });
            for mutation in mutations_for(TeamsEndpoint::Create, &body).unwrap() {
                apply(&mut state, mutation);
            }
        }

        assert_eq!(state.teams.len(), 2);
        assert_eq!(state.user.as_ref().unwrap().remaining_teams, 0);
        assert_eq!(state.active_team.as_ref().map(|t| t.id), Some(first));
    }

    #[test]
    fn leave_with_null_active_team() {
        let id = Uuid::new_v4();
        let body = json!({ "success": true, "team": team_json(id), "activeTeam": null });

        let mutations = mutations_for(TeamsEndpoint::Leave, &body).unwrap();

        assert_eq!(
            mutations,
            vec![
                UserMutation::RemoveTeam(id),
                UserMutation::SetActiveTeam(None)
            ]
        );
    }

    #[test]
    fn types_response() {
        let body = json!({ "success": true, "types": [{ "id": 1, "team": "school" }] });

        let mutations = mutations_for(TeamsEndpoint::Types, &body).unwrap();

        assert_eq!(
            mutations,
            vec![UserMutation::SetTeamTypes(vec![TeamType {
                id: 1,
                team: "school".to_string()
            }])]
        );
    }

    #[test]
    fn missing_team_is_malformed() {
        let body = json!({ "success": true });

        assert!(matches!(
            mutations_for(TeamsEndpoint::Create, &body),
            Err(ClientError::Malformed(_))
        ));
    }
}
