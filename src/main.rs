use project_notes_backend::app_state::{AppConfig, AppState};
use project_notes_backend::database;
use project_notes_backend::router::create_app_router;
use std::net::SocketAddr;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "project_notes_backend=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("starting project notes backend");

    // Load environment variables
    dotenvy::dotenv().ok();
    let config = AppConfig::default();

    info!(database_url = %config.database_url, "initializing database");
    let state = AppState::new(&config).await?;

    if let Err(e) = database::health_check(&state.pool).await {
        error!(error = %e, "database health check failed");
        std::process::exit(1);
    }
    info!("database health check passed");

    let app = create_app_router(state.clone());

    let listener =
        tokio::net::TcpListener::bind((config.server_host.as_str(), config.server_port)).await?;
    info!(addr = %listener.local_addr()?, "listening");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    state.pool.close().await;
    info!("server shut down complete");

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown signal received");
}
