use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::domain::repositories::{
    TeamRepository, TeamTypeRepository, UnitOfWork, UserRepository,
};
use crate::infrastructure::repositories::{
    PostgresTeamRepository, PostgresTeamTypeRepository, PostgresUnitOfWork,
    PostgresUserRepository,
};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub teams: Arc<dyn TeamRepository>,
    pub users: Arc<dyn UserRepository>,
    pub team_types: Arc<dyn TeamTypeRepository>,
    /// Every multi-row write goes through here
    pub unit_of_work: Arc<dyn UnitOfWork>,
    pub auth: AuthSettings,
}

/// What the auth extractor needs to verify bearer tokens
#[derive(Clone)]
pub struct AuthSettings {
    pub jwt_secret: Arc<str>,
}

impl AppState {
    pub fn new(
        teams: Arc<dyn TeamRepository>,
        users: Arc<dyn UserRepository>,
        team_types: Arc<dyn TeamTypeRepository>,
        unit_of_work: Arc<dyn UnitOfWork>,
        jwt_secret: &str,
    ) -> Self {
        Self {
            teams,
            users,
            team_types,
            unit_of_work,
            auth: AuthSettings {
                jwt_secret: Arc::from(jwt_secret),
            },
        }
    }

    /// State backed by the PostgreSQL repositories
    pub fn postgres(pool: PgPool, jwt_secret: &str) -> Self {
        Self::new(
            Arc::new(PostgresTeamRepository::new(pool.clone())),
            Arc::new(PostgresUserRepository::new(pool.clone())),
            Arc::new(PostgresTeamTypeRepository::new(pool.clone())),
            Arc::new(PostgresUnitOfWork::new(pool)),
            jwt_secret,
        )
    }
}

impl FromRef<AppState> for AuthSettings {
    fn from_ref(state: &AppState) -> Self {
        state.auth.clone()
    }
}
