use std::sync::Arc;

use crate::domain::repositories::UnitOfWork;
use crate::domain::team::Team;
use crate::domain::user::User;

use super::error::ActionResult;

/// Action to add the acting user to a team.
///
/// The caller has already checked the user is not a member. The team's
/// member counter goes up by one and the team becomes the user's active
/// team when they had none. All of it commits in one transaction.
pub struct JoinTeamAction {
    uow: Arc<dyn UnitOfWork>,
}

impl JoinTeamAction {
    pub fn new(uow: Arc<dyn UnitOfWork>) -> Self {
        Self { uow }
    }

    #[tracing::instrument(
        name = "join_team",
        skip_all,
        fields(user_id = %user.id, team_id = %team.id()),
        err
    )]
    pub async fn run(&self, user: &mut User, team: &mut Team) -> ActionResult<()> {
        let mut joined = team.clone();
        let event = joined.record_member_joined(user.id);

        let mut member = user.clone();
        let activated = member.activate_team_if_none(team.id());

        let mut tx = self.uow.begin().await?;
        tx.add_member(team.id(), member.id).await?;
        tx.save_team(&joined).await?;
        if activated {
            tx.save_user(&member).await?;
        }
        tx.commit().await?;

        *team = joined;
        *user = member;
        event.record();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::test_support::{stored_team, stores, unsaved_user, user};
    use crate::domain::repositories::{TeamRepository, UserRepository};
    use uuid::Uuid;

    #[tokio::test]
    async fn adds_membership_and_counts_member() {
        let s = stores();
        let mut joiner = user(&s.users, 1);
        let mut team = stored_team(&s.uow, "river", Uuid::new_v4()).await;

        JoinTeamAction::new(s.uow.clone())
            .run(&mut joiner, &mut team)
            .await
            .unwrap();

        assert!(s.teams.is_member(team.id(), joiner.id).await.unwrap());
        assert_eq!(s.teams.member_count(team.id()).await.unwrap(), 2);
        let stored = s.teams.find_by_id(team.id()).await.unwrap().unwrap();
        assert_eq!(stored.members(), 2);
        assert_eq!(team.members(), 2);
    }

    #[tokio::test]
    async fn first_team_becomes_active() {
        let s = stores();
        let mut joiner = user(&s.users, 1);
        let mut team = stored_team(&s.uow, "river", Uuid::new_v4()).await;

        JoinTeamAction::new(s.uow.clone())
            .run(&mut joiner, &mut team)
            .await
            .unwrap();

        let stored = s.users.find_by_id(joiner.id).await.unwrap().unwrap();
        assert_eq!(stored.active_team, Some(team.id()));
    }

    #[tokio::test]
    async fn existing_active_team_is_kept() {
        let s = stores();
        let mut joiner = user(&s.users, 1);
        let mut first = stored_team(&s.uow, "river", Uuid::new_v4()).await;
        let mut second = stored_team(&s.uow, "lake", Uuid::new_v4()).await;
        let action = JoinTeamAction::new(s.uow.clone());

        action.run(&mut joiner, &mut first).await.unwrap();
        action.run(&mut joiner, &mut second).await.unwrap();

        let stored = s.users.find_by_id(joiner.id).await.unwrap().unwrap();
        assert_eq!(stored.active_team, Some(first.id()));
    }

    #[tokio::test]
    async fn failed_user_write_keeps_membership_unchanged() {
        let s = stores();
        // never stored, so the user write fails at commit
        let mut joiner = unsaved_user(0);
        let mut team = stored_team(&s.uow, "river", Uuid::new_v4()).await;

        let result = JoinTeamAction::new(s.uow.clone())
            .run(&mut joiner, &mut team)
            .await;

        assert!(result.is_err());
        assert!(!s.teams.is_member(team.id(), joiner.id).await.unwrap());
        assert_eq!(s.teams.member_count(team.id()).await.unwrap(), 1);
        let stored = s.teams.find_by_id(team.id()).await.unwrap().unwrap();
        assert_eq!(stored.members(), 1);
        assert_eq!(team.members(), 1);
        assert_eq!(joiner.active_team, None);
    }
}
