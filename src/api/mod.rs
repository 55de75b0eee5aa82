//! HTTP surface of the evaluation service.

mod handlers;
pub mod types;

pub use handlers::{handle_ab_test, handle_evaluate, handle_root};

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::backends::gemini::Gemini;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct ServerState {
    pub gemini: Gemini,
}

/// Builds the service router: a root identification endpoint plus the two
/// evaluation endpoints, with permissive CORS for the dashboard frontend.
pub fn build_router(state: ServerState) -> Router {
    Router::new()
        .route("/", get(handle_root))
        .route("/evaluate", post(handle_evaluate))
        .route("/ab-test", post(handle_ab_test))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
