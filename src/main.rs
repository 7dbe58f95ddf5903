//! # Relay Service
//!
//! Thin entry point that delegates to the server module.

use line_relay::server::{start_server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = ServerConfig::default();

    start_server(config).await
}
