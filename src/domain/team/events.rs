use uuid::Uuid;

/// Domain events raised by the Team aggregate and the team actions
///
/// Actions log these through `tracing` once the change has been persisted.
///
/// # Example
/// ```
/// use teams_api::domain::team::events::TeamEvent;
/// use uuid::Uuid;
///
/// let team_id = Uuid::new_v4();
/// let event = TeamEvent::MemberJoined { team_id, user_id: Uuid::new_v4() };
/// assert_eq!(event.team_id(), team_id);
/// assert_eq!(event.name(), "member_joined");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamEvent {
    /// A user created a new team and became its leader
    Created {
        team_id: Uuid,
        identifier: String,
        leader: Uuid,
    },
    /// The leader renamed the team or changed its identifier
    Updated { team_id: Uuid },
    MemberJoined { team_id: Uuid, user_id: Uuid },
    MemberLeft { team_id: Uuid, user_id: Uuid },
    /// Leadership passed to another member
    LeaderChanged {
        team_id: Uuid,
        previous: Uuid,
        leader: Uuid,
    },
}

impl TeamEvent {
    /// Returns the team_id for this event
    pub fn team_id(&self) -> Uuid {
        match self {
            TeamEvent::Created { team_id, .. } => *team_id,
            TeamEvent::Updated { team_id } => *team_id,
            TeamEvent::MemberJoined { team_id, .. } => *team_id,
            TeamEvent::MemberLeft { team_id, .. } => *team_id,
            TeamEvent::LeaderChanged { team_id, .. } => *team_id,
        }
    }

    /// Short machine-readable event name, used as a log field
    pub fn name(&self) -> &'static str {
        match self {
            TeamEvent::Created { .. } => "created",
            TeamEvent::Updated { .. } => "updated",
            TeamEvent::MemberJoined { .. } => "member_joined",
            TeamEvent::MemberLeft { .. } => "member_left",
            TeamEvent::LeaderChanged { .. } => "leader_changed",
        }
    }

    /// Writes the event to the log
    pub fn record(&self) {
        tracing::info!(event = self.name(), team_id = %self.team_id(), details = ?self, "team event");
    }
}
