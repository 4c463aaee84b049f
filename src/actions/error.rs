use thiserror::Error;

use crate::domain::repositories::RepositoryError;

/// Errors that can occur while running a team action
#[derive(Debug, Error)]
pub enum ActionError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("User has no remaining teams to create")]
    NoRemainingTeams,
}

pub type ActionResult<T> = Result<T, ActionError>;
