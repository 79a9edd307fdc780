//! Tool agent HTTP server
//!
//! Axum server exposing the keyword dispatcher at `POST /api/query` and a
//! static front end at `/`.

mod config;
mod handlers;
mod router;
mod state;

use simple_agent::SimpleAgent;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();

    let agent = SimpleAgent::new();
    tracing::info!("Registered {} tools:", agent.tools().len());
    for name in agent.tools().names() {
        tracing::info!("  • {}", name);
    }

    if !config.static_dir.join("index.html").is_file() {
        tracing::warn!(
            "No index.html in {} - GET / will 404, set STATIC_DIR",
            config.static_dir.display()
        );
    }

    let app = router::build(AppState::new(agent), &config.static_dir);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("Agent demo UI running on http://{}", config.bind_addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /           - Web UI");
    tracing::info!("  GET  /health     - Health check");
    tracing::info!("  POST /api/query  - Run a query");

    axum::serve(listener, app).await?;

    Ok(())
}
