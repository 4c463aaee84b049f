//! In-memory repository adapters
//!
//! Used by the integration tests and for running the API without a
//! database. Memberships are kept in insertion order so "earliest member"
//! queries behave like the PostgreSQL adapter.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::repositories::{
    RepositoryError, RepositoryResult, TeamRepository, TeamTransaction, TeamTypeRepository,
    UnitOfWork, UserRepository,
};
use crate::domain::team::Team;
use crate::domain::team_type::TeamType;
use crate::domain::user::User;

#[derive(Default)]
pub struct InMemoryTeamRepository {
    teams: RwLock<HashMap<Uuid, Team>>,
    /// (team_id, user_id) in join order
    memberships: RwLock<Vec<(Uuid, Uuid)>>,
}

impl InMemoryTeamRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn find_where(&self, predicate: impl Fn(&Team) -> bool) -> RepositoryResult<Option<Team>> {
        let teams = self
            .teams
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(teams.values().find(|t| predicate(t)).cloned())
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn save(&self, team: &Team) -> RepositoryResult<()> {
        let mut teams = self
            .teams
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        let stored = teams
            .get_mut(&team.id())
            .ok_or_else(|| RepositoryError::NotFound(format!("Team {}", team.id())))?;
        *stored = team.clone();

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Team>> {
        let teams = self
            .teams
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(teams.get(&id).cloned())
    }

    async fn find_by_identifier(&self, identifier: &str) -> RepositoryResult<Option<Team>> {
        self.find_where(|t| t.identifier() == identifier)
    }

    async fn find_by_name(&self, name: &str) -> RepositoryResult<Option<Team>> {
        self.find_where(|t| t.name() == name)
    }

    async fn find_for_user(&self, user_id: Uuid) -> RepositoryResult<Vec<Team>> {
        let memberships = self
            .memberships
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let teams = self
            .teams
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        Ok(memberships
            .iter()
            .filter(|(_, member)| *member == user_id)
            .filter_map(|(team_id, _)| teams.get(team_id).cloned())
            .collect())
    }

    async fn is_member(&self, team_id: Uuid, user_id: Uuid) -> RepositoryResult<bool> {
        let memberships = self
            .memberships
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(memberships.contains(&(team_id, user_id)))
    }

    async fn member_count(&self, team_id: Uuid) -> RepositoryResult<i64> {
        let memberships = self
            .memberships
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(memberships.iter().filter(|(t, _)| *t == team_id).count() as i64)
    }

    async fn member_ids(&self, team_id: Uuid) -> RepositoryResult<Vec<Uuid>> {
        let memberships = self
            .memberships
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(memberships
            .iter()
            .filter(|(t, _)| *t == team_id)
            .map(|(_, user_id)| *user_id)
            .collect())
    }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a user
    pub fn insert(&self, user: User) -> RepositoryResult<()> {
        let mut users = self
            .users
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        users.insert(user.id, user);
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<User>> {
        let users = self
            .users
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(users.get(&id).cloned())
    }
}

pub struct InMemoryTeamTypeRepository {
    types: Vec<TeamType>,
}

impl InMemoryTeamTypeRepository {
    pub fn new(mut types: Vec<TeamType>) -> Self {
        types.sort_by_key(|t| t.id);
        Self { types }
    }
}

#[async_trait]
impl TeamTypeRepository for InMemoryTeamTypeRepository {
    async fn all(&self) -> RepositoryResult<Vec<TeamType>> {
        Ok(self.types.clone())
    }

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<TeamType>> {
        Ok(self.types.iter().find(|t| t.id == id).cloned())
    }
}

/// Stages writes and applies them to the in-memory repositories on commit
pub struct InMemoryUnitOfWork {
    teams: Arc<InMemoryTeamRepository>,
    users: Arc<InMemoryUserRepository>,
}

impl InMemoryUnitOfWork {
    pub fn new(teams: Arc<InMemoryTeamRepository>, users: Arc<InMemoryUserRepository>) -> Self {
        Self { teams, users }
    }
}

#[async_trait]
impl UnitOfWork for InMemoryUnitOfWork {
    async fn begin(&self) -> RepositoryResult<Box<dyn TeamTransaction>> {
        Ok(Box::new(InMemoryTeamTransaction {
            teams: self.teams.clone(),
            users: self.users.clone(),
            writes: Vec::new(),
        }))
    }
}

enum Write {
    CreateTeam(Team),
    SaveTeam(Team),
    AddMember(Uuid, Uuid),
    RemoveMember(Uuid, Uuid),
    SaveUser(User),
}

pub struct InMemoryTeamTransaction {
    teams: Arc<InMemoryTeamRepository>,
    users: Arc<InMemoryUserRepository>,
    writes: Vec<Write>,
}

#[async_trait]
impl TeamTransaction for InMemoryTeamTransaction {
    async fn create_team(&mut self, team: &Team) -> RepositoryResult<()> {
        self.writes.push(Write::CreateTeam(team.clone()));
        Ok(())
    }

    async fn save_team(&mut self, team: &Team) -> RepositoryResult<()> {
        self.writes.push(Write::SaveTeam(team.clone()));
        Ok(())
    }

    async fn add_member(&mut self, team_id: Uuid, user_id: Uuid) -> RepositoryResult<()> {
        self.writes.push(Write::AddMember(team_id, user_id));
        Ok(())
    }

    async fn remove_member(&mut self, team_id: Uuid, user_id: Uuid) -> RepositoryResult<()> {
        self.writes.push(Write::RemoveMember(team_id, user_id));
        Ok(())
    }

    async fn save_user(&mut self, user: &User) -> RepositoryResult<()> {
        self.writes.push(Write::SaveUser(user.clone()));
        Ok(())
    }

    /// Applies every write to copies first; the stores change only if all succeed
    async fn commit(self: Box<Self>) -> RepositoryResult<()> {
        let Self {
            teams,
            users,
            writes,
        } = *self;

        // same lock order as `find_for_user`
        let mut memberships = teams
            .memberships
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut team_rows = teams
            .teams
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut user_rows = users
            .users
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        let mut next_memberships = memberships.clone();
        let mut next_teams = team_rows.clone();
        let mut next_users = user_rows.clone();

        for write in writes {
            match write {
                Write::CreateTeam(team) => {
                    next_teams.insert(team.id(), team);
                }
                Write::SaveTeam(team) => {
                    let stored = next_teams
                        .get_mut(&team.id())
                        .ok_or_else(|| RepositoryError::NotFound(format!("Team {}", team.id())))?;
                    *stored = team;
                }
                Write::AddMember(team_id, user_id) => {
                    if !next_memberships.contains(&(team_id, user_id)) {
                        next_memberships.push((team_id, user_id));
                    }
                }
                Write::RemoveMember(team_id, user_id) => {
                    next_memberships.retain(|m| *m != (team_id, user_id));
                }
                Write::SaveUser(user) => {
                    let stored = next_users
                        .get_mut(&user.id)
                        .ok_or_else(|| RepositoryError::NotFound(format!("User {}", user.id)))?;
                    *stored = user;
                }
            }
        }

        *memberships = next_memberships;
        *team_rows = next_teams;
        *user_rows = next_users;

        Ok(())
    }
}
