// API layer module (adapters for controllers)
// Follows Hexagonal Architecture - API is an adapter

pub mod envelope;
pub mod errors;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod requests;
pub mod routes;
pub mod state;

pub use routes::router;
pub use state::AppState;
