//! Console front end for the kanban board store.
//!
//! The binary reads commands line by line and drives a [`kanban_board::BoardStore`].

pub mod cli;
pub mod render;
pub mod repl;

pub use cli::Cli;
pub use repl::{parse_repl_command, run_repl, ReplCommand, ReplOptions};
