use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::domain::team_type::TeamType;

/// Read-only access to the team type lookup table
#[async_trait]
pub trait TeamTypeRepository: Send + Sync {
    /// All team types ordered by ID
    async fn all(&self) -> RepositoryResult<Vec<TeamType>>;

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<TeamType>>;
}
