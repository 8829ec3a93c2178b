// SPDX-FileCopyrightText: 2026 Dropchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! dropchat - inspect and maintain a chat drop message store.

mod commands;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dropchat_config::DropChatConfig;
use dropchat_storage::SqliteChatDropMessageRepository;

/// Inspect and maintain a chat drop message store.
#[derive(Parser, Debug)]
#[command(name = "dropchat", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard hierarchy.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Commands {
    /// Show one conversation, newest first.
    History {
        contact: i64,
        identity: i64,
        #[arg(long, default_value_t = 0)]
        offset: usize,
        /// Messages per page (defaults to `paging.default_page_size`).
        #[arg(long)]
        page_size: Option<usize>,
    },
    /// Show the most recent message of every conversation.
    Latest { identity: i64 },
    /// List unread messages across all contacts.
    Unread { identity: i64 },
    /// Mark every unread message of a conversation as read.
    MarkRead { contact: i64, identity: i64 },
    /// Show a single message.
    Show { id: i64 },
    /// Delete a single message.
    Delete { id: i64 },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(errors) => {
            dropchat_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.log.level);

    let repo = match SqliteChatDropMessageRepository::open(&config.storage).await {
        Ok(repo) => repo,
        Err(e) => {
            eprintln!("dropchat: failed to open {}: {e}", config.storage.database_path);
            std::process::exit(1);
        }
    };

    let result = commands::run(&repo, &config, cli.command, cli.json).await;

    if let Err(e) = repo.close().await {
        tracing::warn!(error = %e, "failed to close database cleanly");
    }

    if let Err(e) = result {
        eprintln!("dropchat: {e}");
        std::process::exit(1);
    }
}

fn load_config(
    path: Option<&std::path::Path>,
) -> Result<DropChatConfig, Vec<dropchat_config::ConfigError>> {
    match path {
        Some(path) => dropchat_config::load_and_validate_path(path),
        None => dropchat_config::load_and_validate(),
    }
}

/// Initialize the tracing subscriber. `RUST_LOG` overrides the configured level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("dropchat={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
