use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use super::postgres_team_repository::{
    bind_team_insert, bind_team_update, INSERT_TEAM_SQL, UPDATE_TEAM_SQL,
};
use crate::domain::repositories::{RepositoryError, RepositoryResult, TeamTransaction, UnitOfWork};
use crate::domain::team::Team;
use crate::domain::user::User;

/// PostgreSQL implementation of UnitOfWork
pub struct PostgresUnitOfWork {
    pool: PgPool,
}

impl PostgresUnitOfWork {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UnitOfWork for PostgresUnitOfWork {
    async fn begin(&self) -> RepositoryResult<Box<dyn TeamTransaction>> {
        let tx = self.pool.begin().await?;
        Ok(Box::new(PostgresTeamTransaction { tx }))
    }
}

/// Rolls back when dropped without `commit`
pub struct PostgresTeamTransaction {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl TeamTransaction for PostgresTeamTransaction {
    async fn create_team(&mut self, team: &Team) -> RepositoryResult<()> {
        bind_team_insert(sqlx::query(INSERT_TEAM_SQL), team)
            .execute(&mut *self.tx)
            .await?;

        Ok(())
    }

    async fn save_team(&mut self, team: &Team) -> RepositoryResult<()> {
        let result = bind_team_update(sqlx::query(UPDATE_TEAM_SQL), team)
            .execute(&mut *self.tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Team {}", team.id())));
        }

        Ok(())
    }

    async fn add_member(&mut self, team_id: Uuid, user_id: Uuid) -> RepositoryResult<()> {
        sqlx::query(
            r#"
            INSERT INTO team_user (team_id, user_id, created_at)
            VALUES ($1, $2, clock_timestamp())
            ON CONFLICT (team_id, user_id) DO NOTHING
            "#,
        )
        .bind(team_id)
        .bind(user_id)
        .execute(&mut *self.tx)
        .await?;

        Ok(())
    }

    async fn remove_member(&mut self, team_id: Uuid, user_id: Uuid) -> RepositoryResult<()> {
        sqlx::query("DELETE FROM team_user WHERE team_id = $1 AND user_id = $2")
            .bind(team_id)
            .bind(user_id)
            .execute(&mut *self.tx)
            .await?;

        Ok(())
    }

    async fn save_user(&mut self, user: &User) -> RepositoryResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET remaining_teams = $2, active_team = $3, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(user.id)
        .bind(user.remaining_teams)
        .bind(user.active_team)
        .execute(&mut *self.tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("User {}", user.id)));
        }

        Ok(())
    }

    async fn commit(self: Box<Self>) -> RepositoryResult<()> {
        self.tx.commit().await?;
        Ok(())
    }
}
