//! CLI command definitions for the `confidant` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod chat;
pub mod history;
pub mod status;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use confidant_infra::config::{load_service_config, CONFIG_FILE_NAME};
use confidant_infra::sqlite::pool::{default_database_url, resolve_data_dir};
use confidant_types::config::ServiceConfig;

/// A reflective conversation partner, over HTTP or the terminal.
#[derive(Parser)]
#[command(name = "confidant", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Also export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    /// Database connection string. Defaults to `~/.confidant/confidant.db`.
    #[arg(long, global = true, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Path to `confidant.toml`. Defaults to the data directory.
    #[arg(long, global = true, env = "CONFIDANT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// The configured database URL, or the default one in the data directory.
    pub fn database_url(&self) -> String {
        self.database_url
            .clone()
            .unwrap_or_else(default_database_url)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the REST API server.
    Serve {
        /// Address to bind.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on.
        #[arg(short, long, default_value_t = 8000)]
        port: u16,
    },

    /// Send one message and print the reply.
    Chat {
        /// The message to send.
        message: String,
    },

    /// Show stored exchanges, newest first.
    ///
    /// Creates an empty database at the configured location if none exists yet.
    #[command(alias = "chats")]
    History {
        /// Show at most this many exchanges.
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show database location and exchange count.
    ///
    /// Creates an empty database at the configured location if none exists yet.
    Status,

    /// Generate shell completions.
    Completions {
        /// Shell to generate for.
        shell: Shell,
    },
}

/// Path of the config file: the explicit one, or `confidant.toml` in the data directory.
pub fn config_path(explicit: Option<&Path>) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| resolve_data_dir().join(CONFIG_FILE_NAME))
}

/// Load the service config from [`config_path`].
pub async fn load_config(explicit: Option<&Path>) -> ServiceConfig {
    load_service_config(&config_path(explicit)).await
}
