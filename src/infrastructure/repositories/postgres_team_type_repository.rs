use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::repositories::{RepositoryResult, TeamTypeRepository};
use crate::domain::team_type::TeamType;

/// PostgreSQL implementation of TeamTypeRepository
pub struct PostgresTeamTypeRepository {
    pool: PgPool,
}

impl PostgresTeamTypeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamTypeRepository for PostgresTeamTypeRepository {
    async fn all(&self) -> RepositoryResult<Vec<TeamType>> {
        let types = sqlx::query_as::<_, TeamType>("SELECT id, team FROM team_types ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(types)
    }

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<TeamType>> {
        let team_type =
            sqlx::query_as::<_, TeamType>("SELECT id, team FROM team_types WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(team_type)
    }
}
