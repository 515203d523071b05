//! Rollcall service binary - composition root.

use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use rollcall::adapters::http::{api_router, AttendanceHandlers, SessionHandlers};
use rollcall::adapters::storage::InMemorySessionStore;
use rollcall::application::handlers::attendance::{CheckInHandler, ListAttendeesHandler};
use rollcall::application::handlers::session::{
    EndSessionHandler, GetSessionHandler, StartSessionHandler,
};
use rollcall::config::{AppConfig, ServerConfig};
use rollcall::ports::SessionStore;

#[tokio::main]
async fn main() {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());

    let session_handlers = SessionHandlers::new(
        Arc::new(StartSessionHandler::new(store.clone())),
        Arc::new(GetSessionHandler::new(store.clone())),
        Arc::new(EndSessionHandler::new(store.clone())),
    );
    let attendance_handlers = AttendanceHandlers::new(
        Arc::new(CheckInHandler::new(store.clone())),
        Arc::new(ListAttendeesHandler::new(store)),
    );

    let app = api_router(session_handlers, attendance_handlers)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.server))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )));

    let addr = match config.server.socket_addr() {
        Ok(addr) => addr,
        Err(e) => {
            eprintln!("Invalid bind address: {}", e);
            std::process::exit(1);
        }
    };

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    tracing::info!(%addr, environment = ?config.server.environment, "rollcall listening");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Builds the CORS layer from configuration.
///
/// With explicit origins configured only those are allowed; otherwise the
/// layer is permissive, which suits local development.
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any)
    }
}
