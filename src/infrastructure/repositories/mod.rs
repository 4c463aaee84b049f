// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod in_memory;
pub mod postgres_team_repository;
pub mod postgres_team_type_repository;
pub mod postgres_unit_of_work;
pub mod postgres_user_repository;

pub use in_memory::{
    InMemoryTeamRepository, InMemoryTeamTypeRepository, InMemoryUnitOfWork, InMemoryUserRepository,
};
pub use postgres_team_repository::PostgresTeamRepository;
pub use postgres_team_type_repository::PostgresTeamTypeRepository;
pub use postgres_unit_of_work::PostgresUnitOfWork;
pub use postgres_user_repository::PostgresUserRepository;
