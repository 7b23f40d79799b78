//! CLI definition for the kanban console.
//!
//! Only depends on `clap` and `std`.

use std::path::PathBuf;

use clap::Parser;

/// Kanban - an in-memory board, column and card console.
///
/// Reads one command per line from stdin and prints the active board after
/// every change. Type `help` at the prompt for the command list.
#[derive(Parser, Debug)]
#[command(name = "kanban")]
#[command(version)]
#[command(about = "In-memory kanban board console")]
#[command(
    long_about = "Drive an in-memory kanban store one command per line.\n\n\
    Boards, columns and cards are addressed by their 1-based position as \
    printed: column `2`, card `2.3` (third card of the second column).\n\n\
    Environment variables:\n  \
    KANBAN_SEED_COLUMNS    Column titles for new boards\n  \
    KANBAN_ACTIVITY_LIMIT  Activity entries to keep\n  \
    KANBAN_SAMPLE_BOARD    Start with the sample board\n  \
    KANBAN_ACTOR           Actor recorded on activity entries\n  \
    RUST_LOG               Log filter (logs go to stderr)"
)]
pub struct Cli {
    /// Enable debug output to stderr
    #[arg(short, long)]
    pub debug: bool,

    /// TOML configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Start with the sample board
    #[arg(long)]
    pub sample: bool,

    /// Record this actor on every activity entry
    #[arg(long, value_name = "NAME")]
    pub actor: Option<String>,

    /// Skip confirmation for destructive commands
    #[arg(short, long)]
    pub yes: bool,

    /// Print state as JSON instead of tables
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["kanban"]);
        assert!(!cli.debug);
        assert!(!cli.sample);
        assert!(!cli.yes);
        assert!(!cli.json);
        assert!(cli.config.is_none());
        assert!(cli.actor.is_none());
    }

    #[test]
    fn test_cli_parsing_flags() {
        let cli = Cli::parse_from([
            "kanban",
            "--sample",
            "-y",
            "--json",
            "--actor",
            "alice",
            "--config",
            "board.toml",
        ]);
        assert!(cli.sample);
        assert!(cli.yes);
        assert!(cli.json);
        assert_eq!(cli.actor.as_deref(), Some("alice"));
        assert_eq!(cli.config, Some(PathBuf::from("board.toml")));
    }
}
