mod api;
mod config;
mod schema;
mod storage;

use crate::api::AppState;
use crate::config::AppConfig;
use anyhow::Context;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::load()?;

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    info!("🚀 Starting Recipe API Server");
    info!("📋 Configuration loaded");
    info!("   - Server: {}:{}", config.server.host, config.server.port);
    info!("   - Log level: {}", config.logging.level);
    info!("   - Max foods per request: {}", config.foods.max_total);

    // Seed the record store
    let recipes = config
        .recipe_store()
        .context("Invalid recipe seed data")?;
    info!("✅ Record store ready ({} recipes)", recipes.len());

    let state = AppState::new(recipes).with_max_foods(config.foods.max_total);
    let app = api::router(state);

    // Start server
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("🌐 Server listening on http://{}", addr);
    info!("");
    info!("📡 Available endpoints:");
    info!("   GET  /                 - Greeting");
    info!("   GET  /test             - Active demo entries");
    info!("   GET  /recipes          - List recipes");
    info!("   GET  /recipe/{{id}}      - Get recipe by id");
    info!("   GET  /search           - Search recipes (keyword, max_result)");
    info!("   POST /add-recipe       - Validate a new recipe");
    info!("   GET  /foods/{{total}}    - Generate food records");
    info!("   POST /items/           - Price an item");
    info!("   GET  /openapi.json     - OpenAPI document");
    info!("");
    info!("✨ Server is ready to accept requests!");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server shutting down gracefully");

    Ok(())
}

/// Graceful shutdown handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("🛑 Shutdown signal received");
}
