use serde::Serialize;
use uuid::Uuid;

/// A person who can create, join and leave teams
///
/// `remaining_teams` caps how many more teams the user may create.
/// `active_team` is the team the user is currently collecting for, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub remaining_teams: i32,
    pub active_team: Option<Uuid>,
}

impl User {
    /// True while the user still has team creation slots left
    pub fn can_create_team(&self) -> bool {
        self.remaining_teams > 0
    }

    /// Uses up one team creation slot
    ///
    /// # Returns
    /// * `Err(String)` - If no slots are left
    pub fn consume_team_slot(&mut self) -> Result<(), String> {
        if !self.can_create_team() {
            return Err("No remaining teams".to_string());
        }
        self.remaining_teams -= 1;
        Ok(())
    }

    /// Makes `team_id` the active team unless one is already set
    ///
    /// Returns true when the active team changed.
    pub fn activate_team_if_none(&mut self, team_id: Uuid) -> bool {
        if self.active_team.is_some() {
            return false;
        }
        self.active_team = Some(team_id);
        true
    }

    /// True when `team_id` is the user's active team
    pub fn is_active_team(&self, team_id: Uuid) -> bool {
        self.active_team == Some(team_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(remaining_teams: i32) -> User {
        User {
            id: Uuid::new_v4(),
            name: "Sam".to_string(),
            remaining_teams,
            active_team: None,
        }
    }

    #[test]
    fn consume_slot_decrements() {
        let mut user = user(2);
        user.consume_team_slot().unwrap();

        assert_eq!(user.remaining_teams, 1);
        assert!(user.can_create_team());
    }

    #[test]
    fn consume_last_slot_then_fail() {
        let mut user = user(1);
        user.consume_team_slot().unwrap();

        assert!(!user.can_create_team());
        assert!(user.consume_team_slot().is_err());
        assert_eq!(user.remaining_teams, 0);
    }

    #[test]
    fn negative_counter_cannot_create() {
        assert!(!user(-1).can_create_team());
    }

    #[test]
    fn activate_team_only_when_none() {
        let mut user = user(1);
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();

        assert!(user.activate_team_if_none(first));
        assert!(!user.activate_team_if_none(second));
        assert!(user.is_active_team(first));
        assert!(!user.is_active_team(second));
    }
}
