//! RenameBoard command

use crate::state::BoardState;
use crate::types::BoardId;
use kanban_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};

/// Rename a board
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RenameBoard {
    /// The board to rename
    pub id: BoardId,
    /// The new title
    pub title: String,
}

impl RenameBoard {
    pub fn new(id: impl Into<BoardId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

operation!(
    RenameBoard,
    verb = "rename",
    noun = "board",
    description = "Change a board's title"
);

impl Execute<BoardState> for RenameBoard {
    fn execute(&self, state: &BoardState) -> ExecutionResult<BoardState> {
        match state.board(&self.id) {
            Some(board) if board.title != self.title => {}
            _ => return ExecutionResult::Unchanged,
        }

        let boards = state
            .boards()
            .iter()
            .cloned()
            .map(|mut board| {
                if board.id == self.id {
                    board.title = self.title.clone();
                }
                board
            })
            .collect();

        ExecutionResult::Changed(state.successor(boards))
    }
}
