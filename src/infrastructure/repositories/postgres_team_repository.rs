use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgArguments;
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

use crate::domain::repositories::{RepositoryError, RepositoryResult, TeamRepository};
use crate::domain::team::Team;

const TEAM_COLUMNS: &str = r#"
    t.id, t.name, t.identifier, t.type_id, t.type_name,
    t.leader, t.created_by, t.members, t.created_at, t.updated_at
"#;

/// Row shape of the `teams` table
#[derive(Debug, sqlx::FromRow)]
struct TeamRow {
    id: Uuid,
    name: String,
    identifier: String,
    type_id: i32,
    type_name: String,
    leader: Uuid,
    created_by: Uuid,
    members: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<TeamRow> for Team {
    fn from(r: TeamRow) -> Self {
        Team::from_persistence(
            r.id,
            r.name,
            r.identifier,
            r.type_id,
            r.type_name,
            r.leader,
            r.created_by,
            r.members,
            r.created_at,
            r.updated_at,
        )
    }
}

pub(super) const INSERT_TEAM_SQL: &str = r#"
    INSERT INTO teams (
        id, name, identifier, type_id, type_name,
        leader, created_by, members, created_at, updated_at
    )
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
"#;

pub(super) const UPDATE_TEAM_SQL: &str = r#"
    UPDATE teams
    SET name = $2, identifier = $3, leader = $4, members = $5, updated_at = $6
    WHERE id = $1
"#;

type PgQuery<'q> = sqlx::query::Query<'q, Postgres, PgArguments>;

pub(super) fn bind_team_insert<'q>(query: PgQuery<'q>, team: &'q Team) -> PgQuery<'q> {
    query
        .bind(team.id())
        .bind(team.name())
        .bind(team.identifier())
        .bind(team.type_id())
        .bind(team.type_name())
        .bind(team.leader())
        .bind(team.created_by())
        .bind(team.members())
        .bind(team.created_at())
        .bind(team.updated_at())
}

pub(super) fn bind_team_update<'q>(query: PgQuery<'q>, team: &'q Team) -> PgQuery<'q> {
    query
        .bind(team.id())
        .bind(team.name())
        .bind(team.identifier())
        .bind(team.leader())
        .bind(team.members())
        .bind(team.updated_at())
}

/// PostgreSQL implementation of TeamRepository
///
/// Teams live in `teams`; memberships in `team_user (team_id, user_id, created_at)`.
/// Inserts and membership changes go through `PostgresUnitOfWork`.
pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    /// Creates a new PostgresTeamRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_one_by(&self, column: &str, value: &str) -> RepositoryResult<Option<Team>> {
        let sql = format!("SELECT {TEAM_COLUMNS} FROM teams t WHERE t.{column} = $1");
        let row = sqlx::query_as::<_, TeamRow>(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Team::from))
    }
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn save(&self, team: &Team) -> RepositoryResult<()> {
        let result = bind_team_update(sqlx::query(UPDATE_TEAM_SQL), team)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Team {}", team.id())));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Team>> {
        let sql = format!("SELECT {TEAM_COLUMNS} FROM teams t WHERE t.id = $1");
        let row = sqlx::query_as::<_, TeamRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Team::from))
    }

    async fn find_by_identifier(&self, identifier: &str) -> RepositoryResult<Option<Team>> {
        self.find_one_by("identifier", identifier).await
    }

    async fn find_by_name(&self, name: &str) -> RepositoryResult<Option<Team>> {
        self.find_one_by("name", name).await
    }

    async fn find_for_user(&self, user_id: Uuid) -> RepositoryResult<Vec<Team>> {
        let sql = format!(
            r#"
            SELECT {TEAM_COLUMNS}
            FROM teams t
            JOIN team_user tu ON tu.team_id = t.id
            WHERE tu.user_id = $1
            ORDER BY tu.created_at, t.id
            "#
        );
        let rows = sqlx::query_as::<_, TeamRow>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Team::from).collect())
    }

    async fn is_member(&self, team_id: Uuid, user_id: Uuid) -> RepositoryResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM team_user WHERE team_id = $1 AND user_id = $2)",
        )
        .bind(team_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn member_count(&self, team_id: Uuid) -> RepositoryResult<i64> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM team_user WHERE team_id = $1")
                .bind(team_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }

    async fn member_ids(&self, team_id: Uuid) -> RepositoryResult<Vec<Uuid>> {
        let ids = sqlx::query_scalar::<_, Uuid>(
            "SELECT user_id FROM team_user WHERE team_id = $1 ORDER BY created_at, user_id",
        )
        .bind(team_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(ids)
    }
}
