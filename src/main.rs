use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_commitment_config::CommitmentConfig;
use tokio::signal;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use jup_limit_action::jupiter::JupiterClient;
use jup_limit_action::network::{JUPITER_LIMIT_API_URL, MAINNET_RPC_URL};
use jup_limit_action::server::{router, AppState};

#[derive(Parser)]
#[command(name = "jup-limit-action")]
#[command(about = "Solana Actions endpoint for Jupiter limit orders", long_about = None)]
struct Cli {
    /// Address to bind the HTTP server on.
    #[arg(long, env = "ACTION_BIND_ADDR", default_value = "0.0.0.0:3000")]
    bind: SocketAddr,

    /// Jupiter limit-order API base URL.
    #[arg(long, env = "ACTION_JUPITER_URL", default_value = JUPITER_LIMIT_API_URL)]
    jupiter_url: String,

    /// Solana RPC endpoint for the cluster connection.
    #[arg(long, env = "ACTION_RPC_URL", default_value = MAINNET_RPC_URL)]
    rpc_url: String,

    #[arg(long, env = "ACTION_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_tracing(&cli.log_level);

    let rpc = Arc::new(RpcClient::new_with_commitment(
        cli.rpc_url.clone(),
        CommitmentConfig::confirmed(),
    ));
    info!(url = %cli.rpc_url, "cluster connection established");

    let state = AppState {
        jupiter: JupiterClient::new(&cli.jupiter_url),
        rpc,
    };
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(cli.bind)
        .await
        .with_context(|| format!("failed to bind {}", cli.bind))?;
    info!(addr = %cli.bind, "action endpoint listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("action endpoint stopped");
    Ok(())
}

fn setup_tracing(log_level: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
