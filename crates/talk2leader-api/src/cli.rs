//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Talk2Leader -- chat with historical figures.
#[derive(Debug, Parser)]
#[command(name = "talk2leader", version, about)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Data directory holding config.toml and the session database.
    #[arg(long, env = "TALK2LEADER_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Emit logs as JSON lines.
    #[arg(long, env = "TALK2LEADER_JSON_LOGS", global = true)]
    pub json_logs: bool,

    /// Export tracing spans via OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server.
    Serve {
        /// Interface to bind (overrides config.toml).
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides config.toml).
        #[arg(short, long)]
        port: Option<u16>,

        /// Generate a random session secret when none is configured.
        /// Sessions then end whenever the process restarts.
        #[arg(long)]
        ephemeral_session_secret: bool,
    },

    /// Print a freshly generated session secret.
    GenSecret,

    /// Delete chat histories older than the configured session lifetime.
    PurgeSessions,
}

impl Cli {
    /// Default log directive derived from `-v` / `-q`.
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 if self.quiet => "error",
            0 => "info",
            1 => "info,talk2leader=debug",
            _ => "trace",
        }
    }
}
