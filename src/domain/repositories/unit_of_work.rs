use async_trait::async_trait;
use uuid::Uuid;

use super::error::RepositoryResult;
use crate::domain::team::Team;
use crate::domain::user::User;

/// Opens transactions over teams, memberships and users
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    async fn begin(&self) -> RepositoryResult<Box<dyn TeamTransaction>>;
}

/// Writes that become visible together on `commit`
///
/// Dropping a transaction without committing discards every write made
/// through it.
#[async_trait]
pub trait TeamTransaction: Send {
    /// Insert a new team
    async fn create_team(&mut self, team: &Team) -> RepositoryResult<()>;

    /// Persist changes to an existing team
    async fn save_team(&mut self, team: &Team) -> RepositoryResult<()>;

    /// Adding an existing membership is a no-op
    async fn add_member(&mut self, team_id: Uuid, user_id: Uuid) -> RepositoryResult<()>;

    async fn remove_member(&mut self, team_id: Uuid, user_id: Uuid) -> RepositoryResult<()>;

    /// Persist the user's team counter and active team
    async fn save_user(&mut self, user: &User) -> RepositoryResult<()>;

    async fn commit(self: Box<Self>) -> RepositoryResult<()>;
}
