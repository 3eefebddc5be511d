//! Talk2Leader CLI and HTTP server entry point.
//!
//! Binary name: `talk2leader`
//!
//! Loads `.env`, parses CLI arguments, resolves configuration and secrets,
//! then starts the HTTP server or runs a maintenance command.

mod cli;
mod http;
mod state;

use clap::Parser;
use tracing::{info, warn};

use talk2leader_core::history::service::HistoryService;
use talk2leader_infra::config::{
    SecretOrigin, configured_session_secret, gemini_api_key, load_global_config,
    resolve_data_dir, resolve_session_secret,
};
use talk2leader_infra::crypto::session_token::generate_secret;
use talk2leader_infra::sqlite::history::SqliteHistoryStore;
use talk2leader_infra::sqlite::pool::DatabasePool;
use talk2leader_observe::tracing_setup::{init_tracing, shutdown_tracing};
use talk2leader_types::config::LogFormat;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the environment may already be set.
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();

    let format = if cli.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Pretty
    };
    init_tracing(cli.log_directive(), format, cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "Loaded .env");
    }

    let result = run(cli).await;
    shutdown_tracing();
    result
}

/// Execute the selected subcommand once tracing is up.
async fn run(cli: Cli) -> anyhow::Result<()> {
    let data_dir = cli.data_dir.clone().unwrap_or_else(resolve_data_dir);
    tokio::fs::create_dir_all(&data_dir).await?;
    let mut config = load_global_config(&data_dir).await;

    match cli.command {
        Commands::Serve {
            host,
            port,
            ephemeral_session_secret,
        } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }

            let api_key = gemini_api_key()?;
            let (session_secret, origin) =
                resolve_session_secret(configured_session_secret(), ephemeral_session_secret)?;
            if origin == SecretOrigin::Ephemeral {
                warn!("Using an ephemeral session secret: chat histories will be unreachable after restart");
            }

            let ttl_days = config.session.ttl_days;
            let addr = format!("{}:{}", config.host, config.port);
            let state = AppState::init(config, &data_dir, api_key, session_secret).await?;

            if let Err(e) = state.history.purge_expired(ttl_days).await {
                warn!(error = %e, "Failed to purge expired chat histories");
            }

            let listener = tokio::net::TcpListener::bind(&addr).await?;
            info!(
                addr = %addr,
                data_dir = %data_dir.display(),
                model = state.responder.model(),
                "Talk2Leader listening"
            );

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            info!("Server stopped");
        }

        Commands::GenSecret => {
            println!("{}", generate_secret());
        }

        Commands::PurgeSessions => {
            let pool = DatabasePool::open_in(&data_dir).await?;
            let history = HistoryService::new(SqliteHistoryStore::new(pool));
            let removed = history.purge_expired(config.session.ttl_days).await?;
            println!("Removed {removed} expired chat histories");
        }
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
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
