//! # Server Setup
//!
//! Server initialization, route registration, and HTTP server startup.
//!
//! This module provides the main server setup function that creates the Axum
//! router, registers all routes, applies middleware, and starts the HTTP
//! server.

// region: --- Imports
use crate::config::Config;
use crate::error::AppError;
use crate::gemini::GeminiClient;
use crate::handlers;
use crate::history::HistoryStore;
use crate::line::LineClient;
use crate::services::RelayService;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
// endregion: --- Imports

// region: --- AppState
/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub history: Arc<HistoryStore>,
    pub relay: Arc<RelayService>,
}

impl axum::extract::FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl axum::extract::FromRef<AppState> for Arc<HistoryStore> {
    fn from_ref(state: &AppState) -> Self {
        state.history.clone()
    }
}

impl axum::extract::FromRef<AppState> for Arc<RelayService> {
    fn from_ref(state: &AppState) -> Self {
        state.relay.clone()
    }
}
// endregion: --- AppState

// region: --- Server Configuration
/// Server configuration
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:5000")
    pub bind_address: String,
    /// Allowed CORS origins for the history REST surface
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:5000".to_string(),
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
            ],
        }
    }
}
// endregion: --- Server Configuration

// region: --- Server Setup
/// Initialize and start the HTTP server
///
/// # Errors
///
/// This function will return an error if:
/// - Configuration loading fails
/// - HTTP client construction fails
/// - Server binding fails
pub async fn start_server(server_config: ServerConfig) -> anyhow::Result<()> {
    let log_level = std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase();

    let filter = match log_level.as_str() {
        "trace" => tracing_subscriber::EnvFilter::new("trace"),
        "debug" => tracing_subscriber::EnvFilter::new("debug"),
        "info" => tracing_subscriber::EnvFilter::new("info"),
        "warn" => tracing_subscriber::EnvFilter::new("warn"),
        "error" => tracing_subscriber::EnvFilter::new("error"),
        _ => tracing_subscriber::EnvFilter::new("info"),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set global tracing subscriber");

    info!(" CHAT RELAY BACKEND STARTING");
    info!(" Log level: {}", log_level);

    info!("Loading configuration...");
    let config = Config::from_env().map_err(AppError::Config)?;
    config.validate().map_err(AppError::Config)?;

    let history = Arc::new(HistoryStore::new());
    let gemini = Arc::new(GeminiClient::new(config.gemini_api_key.clone())?);
    let line = Arc::new(LineClient::new(config.channel_access_token.clone())?);
    let relay = Arc::new(RelayService::new(gemini, line, Arc::clone(&history)));

    let state = AppState {
        config,
        history,
        relay,
    };

    // Create router
    let app = create_router(state, server_config.allowed_origins.clone());

    // Start server
    let listener = tokio::net::TcpListener::bind(&server_config.bind_address).await?;

    info!(" SERVER READY: http://{}", server_config.bind_address);
    log_server_info();

    axum::serve(listener, app).await?;
    Ok(())
}

/// Create the main application router with all routes
pub fn create_router(state: AppState, allowed_origins: Vec<String>) -> Router {
    use axum::http::{HeaderValue, Method};

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    info!("[ROUTE SETUP] Registering HTTP routes...");
    Router::new()
        .route("/callback", post(handlers::webhook::callback))
        .route(
            "/history",
            get(handlers::history::get_history).delete(handlers::history::delete_history),
        )
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Log server information
fn log_server_info() {
    info!(" WEBHOOK:");
    info!("   • POST   /callback");
    info!(" HISTORY:");
    info!("   • GET    /history");
    info!("   • DELETE /history");
    info!(" HEALTH:");
    info!("   • GET    /health");
}
// endregion: --- Server Setup
