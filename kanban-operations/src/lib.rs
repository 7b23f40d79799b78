//! # Kanban Operations
//!
//! This crate provides the `Operation` and `Execute` traits that every kanban
//! command implements. Commands are plain structs whose fields ARE the
//! parameters; executing one against a state either yields a successor state
//! or reports that nothing changed.
//!
//! ## Example
//!
//! ```ignore
//! use kanban_operations::*;
//!
//! #[derive(Debug, Serialize)]
//! pub struct RenameBoard {
//!     pub id: BoardId,
//!     pub title: String,
//! }
//!
//! operation!(RenameBoard, verb = "rename", noun = "board", description = "Rename a board");
//!
//! impl Execute<BoardState> for RenameBoard {
//!     fn execute(&self, state: &BoardState) -> ExecutionResult<BoardState> {
//!         // return ExecutionResult::Changed or ExecutionResult::Unchanged
//!     }
//! }
//! ```

mod execution_result;
mod log;
mod operation;

pub use execution_result::ExecutionResult;
pub use log::LogEntry;
pub use operation::{Execute, Operation};
