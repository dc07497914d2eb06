use fa_server::cleanup::spawn_activity_cleanup;
use fa_server::error::ServerError;
use fa_server::{AppState, build_router, logger};

use std::error::Error;

use log::{error, info};
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env must be applied before FA_* overrides are read
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = fa_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting fa-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let metrics_handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| ServerError::Metrics {
            message: e.to_string(),
        })?;

    // Initialize database pool (migrations run on connect)
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = fa_db::connect(&database_path, config.database.max_connections).await?;
    info!("Migrations complete");

    let app_state = AppState::from_config(pool, &config, Some(metrics_handle))?;

    let cleanup_task = spawn_activity_cleanup(app_state.activity.clone(), config.activity_log.clone());

    let app = build_router(app_state);

    // Create TCP listener
    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    cleanup_task.abort();
    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => error!("Failed to listen for SIGINT: {}", e),
    }
}
