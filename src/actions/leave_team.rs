use std::sync::Arc;

use crate::domain::repositories::{TeamRepository, UnitOfWork};
use crate::domain::team::Team;
use crate::domain::user::User;

use super::error::ActionResult;

/// Action to remove the acting user from a team.
///
/// This action, in one transaction:
/// 1. Deletes the membership and lowers the member counter
/// 2. Passes leadership to the earliest remaining member if the user led the team
/// 3. Moves the user's active team to another joined team, or clears it
///
/// The caller guarantees the user is a member and is not the last one.
pub struct LeaveTeamAction {
    teams: Arc<dyn TeamRepository>,
    uow: Arc<dyn UnitOfWork>,
}

impl LeaveTeamAction {
    pub fn new(teams: Arc<dyn TeamRepository>, uow: Arc<dyn UnitOfWork>) -> Self {
        Self { teams, uow }
    }

    #[tracing::instrument(
        name = "leave_team",
        skip_all,
        fields(user_id = %user.id, team_id = %team.id()),
        err
    )]
    pub async fn run(&self, user: &mut User, team: &mut Team) -> ActionResult<()> {
        let mut left = team.clone();
        let mut events = vec![left.record_member_left(user.id)];

        if left.is_led_by(user.id) {
            let next = self
                .teams
                .member_ids(team.id())
                .await?
                .into_iter()
                .find(|id| *id != user.id);
            match next {
                Some(next) => events.extend(left.transfer_leadership(next)),
                None => tracing::warn!("team has no members left to lead it"),
            }
        }

        let mut member = user.clone();
        if member.is_active_team(team.id()) {
            let joined = self.teams.find_for_user(member.id).await?;
            member.active_team = joined.iter().map(Team::id).find(|id| *id != team.id());
        }

        let mut tx = self.uow.begin().await?;
        tx.remove_member(team.id(), member.id).await?;
        tx.save_team(&left).await?;
        if member != *user {
            tx.save_user(&member).await?;
        }
        tx.commit().await?;

        *team = left;
        *user = member;
        for event in &events {
            event.record();
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::test_support::{stored_team, stores, user, Stores};
    use crate::actions::JoinTeamAction;
    use crate::domain::repositories::UserRepository;
    use crate::infrastructure::repositories::{InMemoryUnitOfWork, InMemoryUserRepository};

    /// Team led by `leader` with `others` joined after, in order
    async fn team_with(
        s: &Stores,
        identifier: &str,
        leader: &mut User,
        others: &mut [&mut User],
    ) -> Team {
        let mut team = stored_team(&s.uow, identifier, leader.id).await;
        if leader.active_team.is_none() {
            leader.active_team = Some(team.id());
            s.users.insert(leader.clone()).unwrap();
        }

        let join = JoinTeamAction::new(s.uow.clone());
        for other in others.iter_mut() {
            join.run(other, &mut team).await.unwrap();
        }
        team
    }

    async fn reload(users: &InMemoryUserRepository, user: &User) -> User {
        users.find_by_id(user.id).await.unwrap().unwrap()
    }

    #[tokio::test]
    async fn removes_membership_and_counts_member() {
        let s = stores();
        let mut leader = user(&s.users, 1);
        let mut member = user(&s.users, 1);
        let mut team = team_with(&s, "river", &mut leader, &mut [&mut member]).await;

        LeaveTeamAction::new(s.teams.clone(), s.uow.clone())
            .run(&mut member, &mut team)
            .await
            .unwrap();

        assert!(!s.teams.is_member(team.id(), member.id).await.unwrap());
        let stored = s.teams.find_by_id(team.id()).await.unwrap().unwrap();
        assert_eq!(stored.members(), 1);
        assert_eq!(stored.leader(), leader.id);
    }

    #[tokio::test]
    async fn leader_leaving_hands_over_to_earliest_member() {
        let s = stores();
        let mut leader = user(&s.users, 1);
        let mut second = user(&s.users, 1);
        let mut third = user(&s.users, 1);
        let mut team = team_with(&s, "river", &mut leader, &mut [&mut second, &mut third]).await;

        LeaveTeamAction::new(s.teams.clone(), s.uow.clone())
            .run(&mut leader, &mut team)
            .await
            .unwrap();

        let stored = s.teams.find_by_id(team.id()).await.unwrap().unwrap();
        assert_eq!(stored.leader(), second.id);
        assert_eq!(stored.created_by(), leader.id);
    }

    #[tokio::test]
    async fn active_team_moves_to_another_joined_team() {
        let s = stores();
        let mut leader = user(&s.users, 1);
        let mut member = user(&s.users, 1);
        let mut river = team_with(&s, "river", &mut leader, &mut [&mut member]).await;
        let lake = team_with(&s, "lake", &mut leader, &mut [&mut member]).await;
        assert_eq!(member.active_team, Some(river.id()));

        LeaveTeamAction::new(s.teams.clone(), s.uow.clone())
            .run(&mut member, &mut river)
            .await
            .unwrap();

        assert_eq!(reload(&s.users, &member).await.active_team, Some(lake.id()));
    }

    #[tokio::test]
    async fn active_team_cleared_when_no_teams_left() {
        let s = stores();
        let mut leader = user(&s.users, 1);
        let mut member = user(&s.users, 1);
        let mut team = team_with(&s, "river", &mut leader, &mut [&mut member]).await;

        LeaveTeamAction::new(s.teams.clone(), s.uow.clone())
            .run(&mut member, &mut team)
            .await
            .unwrap();

        assert_eq!(reload(&s.users, &member).await.active_team, None);
    }

    #[tokio::test]
    async fn other_active_team_untouched() {
        let s = stores();
        let mut leader = user(&s.users, 1);
        let mut member = user(&s.users, 1);
        let river = team_with(&s, "river", &mut leader, &mut [&mut member]).await;
        let mut lake = team_with(&s, "lake", &mut leader, &mut [&mut member]).await;

        LeaveTeamAction::new(s.teams.clone(), s.uow.clone())
            .run(&mut member, &mut lake)
            .await
            .unwrap();

        assert_eq!(reload(&s.users, &member).await.active_team, Some(river.id()));
    }

    #[tokio::test]
    async fn failed_user_write_keeps_membership_and_leader() {
        let s = stores();
        let mut leader = user(&s.users, 1);
        let mut member = user(&s.users, 1);
        let mut team = team_with(&s, "river", &mut leader, &mut [&mut member]).await;
        // same teams, but a user store that has never seen the leader
        let detached = Arc::new(InMemoryUnitOfWork::new(
            s.teams.clone(),
            Arc::new(InMemoryUserRepository::new()),
        ));

        let result = LeaveTeamAction::new(s.teams.clone(), detached)
            .run(&mut leader, &mut team)
            .await;

        assert!(result.is_err());
        assert!(s.teams.is_member(team.id(), leader.id).await.unwrap());
        let stored = s.teams.find_by_id(team.id()).await.unwrap().unwrap();
        assert_eq!(stored.leader(), leader.id);
        assert_eq!(stored.members(), 2);
        assert_eq!(team.leader(), leader.id);
        assert_eq!(leader.active_team, Some(team.id()));
    }
}
