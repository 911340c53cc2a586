use bikeroute_core::create_network;
use bikeroute_server::{AppState, Cli, ConfigError, ServerConfig, build_router};
use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "bikeroute_server=info,bikeroute_core=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = ServerConfig::load(&cli)?;
    let network_config = config
        .network
        .clone()
        .ok_or_else(|| ConfigError::Invalid("no network configured".to_string()))?;

    tracing::info!(
        bind_address = %config.bind_address(),
        allowed_origin = %config.allowed_origin,
        path_count = config.path_count,
        "Configuration loaded"
    );

    let network = tokio::task::spawn_blocking(move || create_network(&network_config)).await??;
    let state = AppState::from_network(network, config.path_count);
    let app = build_router(state, &config)?;

    let listener = TcpListener::bind(config.bind_address()).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
