use super::events::TeamEvent;
use super::value_objects::{TeamIdentifier, TeamName};
use crate::domain::team_type::TeamType;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Team aggregate root
///
/// A group of users collecting together under a shared name. One member is
/// the leader and is the only one allowed to change the team's details.
///
/// # Invariants
/// - Name and identifier are validated value objects
/// - `members` never drops below zero
/// - `updated_at` is never earlier than `created_at`
///
/// # Example
/// ```
/// use teams_api::domain::team::Team;
/// use teams_api::domain::team::value_objects::{TeamIdentifier, TeamName};
/// use teams_api::domain::team_type::TeamType;
/// use uuid::Uuid;
///
/// let school = TeamType { id: 1, team: "school".to_string() };
/// let (team, events) = Team::new(
///     TeamName::new("Beach Crew").unwrap(),
///     TeamIdentifier::new("beach").unwrap(),
///     &school,
///     Uuid::new_v4(),
/// );
///
/// assert_eq!(team.members(), 1);
/// assert_eq!(events.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Team {
    id: Uuid,
    name: String,
    identifier: String,
    type_id: i32,
    type_name: String,
    leader: Uuid,
    created_by: Uuid,
    members: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Team {
    /// Creates a new Team led by `leader`
    ///
    /// The leader is counted as the first member, so the team starts with
    /// `members == 1` and raises both a `Created` and a `MemberJoined` event.
    pub fn new(
        name: TeamName,
        identifier: TeamIdentifier,
        team_type: &TeamType,
        leader: Uuid,
    ) -> (Self, Vec<TeamEvent>) {
        let now = Utc::now();
        let team = Self {
            id: Uuid::new_v4(),
            name: name.as_str().to_string(),
            identifier: identifier.as_str().to_string(),
            type_id: team_type.id,
            type_name: team_type.team.clone(),
            leader,
            created_by: leader,
            members: 1,
            created_at: now,
            updated_at: now,
        };

        let events = vec![
            TeamEvent::Created {
                team_id: team.id,
                identifier: team.identifier.clone(),
                leader,
            },
            TeamEvent::MemberJoined {
                team_id: team.id,
                user_id: leader,
            },
        ];

        (team, events)
    }

    /// Replaces the team's name and identifier
    pub fn rename(&mut self, name: TeamName, identifier: TeamIdentifier) -> TeamEvent {
        self.name = name.as_str().to_string();
        self.identifier = identifier.as_str().to_string();
        self.touch();

        TeamEvent::Updated { team_id: self.id }
    }

    pub fn record_member_joined(&mut self, user_id: Uuid) -> TeamEvent {
        self.members += 1;
        self.touch();

        TeamEvent::MemberJoined {
            team_id: self.id,
            user_id,
        }
    }

    pub fn record_member_left(&mut self, user_id: Uuid) -> TeamEvent {
        self.members = (self.members - 1).max(0);
        self.touch();

        TeamEvent::MemberLeft {
            team_id: self.id,
            user_id,
        }
    }

    /// Hands leadership to another member
    ///
    /// Returns `None` when `leader` already leads the team.
    pub fn transfer_leadership(&mut self, leader: Uuid) -> Option<TeamEvent> {
        if self.leader == leader {
            return None;
        }

        let previous = self.leader;
        self.leader = leader;
        self.touch();

        Some(TeamEvent::LeaderChanged {
            team_id: self.id,
            previous,
            leader,
        })
    }

    /// True when `user_id` is the team's leader
    pub fn is_led_by(&self, user_id: Uuid) -> bool {
        self.leader == user_id
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now().max(self.created_at);
    }

    // ===== Getters =====

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn type_id(&self) -> i32 {
        self.type_id
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn leader(&self) -> Uuid {
        self.leader
    }

    pub fn created_by(&self) -> Uuid {
        self.created_by
    }

    /// Denormalised member counter kept in step by the actions
    pub fn members(&self) -> i32 {
        self.members
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Reconstructs a Team from persistence layer data
    ///
    /// Bypasses validation since the data was validated before it was stored.
    /// Only to be used by repository implementations.
    #[allow(clippy::too_many_arguments)]
    pub fn from_persistence(
        id: Uuid,
        name: String,
        identifier: String,
        type_id: i32,
        type_name: String,
        leader: Uuid,
        created_by: Uuid,
        members: i32,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            identifier,
            type_id,
            type_name,
            leader,
            created_by,
            members,
            created_at,
            updated_at,
        }
    }
}
