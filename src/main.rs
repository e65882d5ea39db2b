use compound_interest_api::{config::Config, logging, routes, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    // Initialize tracing
    let _log_guards = logging::init_logging(&config)?;

    let addr = config.bind_address();
    tracing::info!(environment = %config.environment, "Loaded configuration");

    // Build application
    let app = routes::create_router(AppState::new(config));

    tracing::info!("🚀 Compound Interest Calculator running on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
