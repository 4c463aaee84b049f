use async_trait::async_trait;
use uuid::Uuid;

use super::error::RepositoryResult;
use crate::domain::team::Team;

/// Repository trait for the Team aggregate and its memberships
///
/// Writes that touch memberships or users go through a
/// [`TeamTransaction`](super::TeamTransaction) instead.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Persist changes to an existing team
    async fn save(&self, team: &Team) -> RepositoryResult<()>;

    /// Find a team by its internal ID
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Team>>;

    /// Find a team by its external identifier
    async fn find_by_identifier(&self, identifier: &str) -> RepositoryResult<Option<Team>>;

    /// Find a team by its exact name
    async fn find_by_name(&self, name: &str) -> RepositoryResult<Option<Team>>;

    /// All teams the user has joined, oldest membership first
    async fn find_for_user(&self, user_id: Uuid) -> RepositoryResult<Vec<Team>>;

    /// True when the user belongs to the team
    async fn is_member(&self, team_id: Uuid, user_id: Uuid) -> RepositoryResult<bool>;

    /// Number of membership rows for the team
    async fn member_count(&self, team_id: Uuid) -> RepositoryResult<i64>;

    /// Member IDs ordered by when they joined
    async fn member_ids(&self, team_id: Uuid) -> RepositoryResult<Vec<Uuid>>;
}
