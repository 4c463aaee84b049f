use axum::{
    routing::{get, patch, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{health, teams};
use crate::api::state::AppState;

/// Builds the application router
///
/// Every team route except `get-types` authenticates through the
/// `CurrentUser` extractor.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/teams/get-types", get(teams::types))
        .route("/api/teams/list", get(teams::list))
        .route("/api/teams/create", post(teams::create))
        .route("/api/teams/update/:team", patch(teams::update))
        .route("/api/teams/join", post(teams::join))
        .route("/api/teams/leave", post(teams::leave))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
