//! Kanban CLI - an in-memory kanban board console.
//!
//! Reads one command per line from stdin; type `help` for the list.
//!
//! Environment variables:
//! - KANBAN_SEED_COLUMNS, KANBAN_ACTIVITY_LIMIT, KANBAN_SAMPLE_BOARD,
//!   KANBAN_ACTOR: override store configuration
//! - RUST_LOG: log filter (logs go to stderr)
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error

use std::io::IsTerminal;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use kanban_board::{BoardStore, StoreConfig};
use kanban_cli::{run_repl, Cli, ReplOptions};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing with appropriate level
    let filter = if cli.debug {
        EnvFilter::new("kanban_board=debug,kanban_cli=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    let mut config = match StoreConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    if cli.sample {
        config = config.with_sample_board(true);
    }
    if let Some(actor) = &cli.actor {
        config = config.with_actor(actor);
    }

    let mut store = BoardStore::with_config(config);
    let options = ReplOptions {
        yes: cli.yes,
        json: cli.json,
        prompt: std::io::stdin().is_terminal(),
    };

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let exit_code = match run_repl(&mut store, stdin.lock(), &mut stdout, options) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    tracing::debug!(changes = store.activity().len(), "session finished");
    std::process::exit(exit_code);
}
