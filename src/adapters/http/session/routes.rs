//! HTTP routes for session endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{end_session, get_session, start_session, SessionHandlers};

/// Creates the session router with all endpoints.
pub fn session_routes(handlers: SessionHandlers) -> Router {
    Router::new()
        .route("/session/start", post(start_session))
        .route("/session/:id", get(get_session))
        .route("/session/:id/end", post(end_session))
        .with_state(handlers)
}
