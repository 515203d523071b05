//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.

pub mod attendance;
pub mod session;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

pub use attendance::{attendance_routes, AttendanceHandlers};
pub use session::{session_routes, SessionHandlers};

/// GET /health - liveness probe
async fn health() -> Json<Value> {
    Json(json!({ "status": "UP" }))
}

/// Assembles the full API router.
pub fn api_router(
    session_handlers: SessionHandlers,
    attendance_handlers: AttendanceHandlers,
) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(session_routes(session_handlers))
        .merge(attendance_routes(attendance_handlers))
}
