// Domain layer module exports
// Domain is independent of infrastructure concerns

pub mod repositories;
pub mod team;
pub mod team_type;
pub mod user;
