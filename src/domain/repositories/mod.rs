// Repository ports
// Implemented by adapters in the infrastructure layer

pub mod error;
pub mod team_repository;
pub mod team_type_repository;
pub mod unit_of_work;
pub mod user_repository;

pub use error::{RepositoryError, RepositoryResult};
pub use team_repository::TeamRepository;
pub use team_type_repository::TeamTypeRepository;
pub use unit_of_work::{TeamTransaction, UnitOfWork};
pub use user_repository::UserRepository;
