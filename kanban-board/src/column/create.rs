//! CreateColumn command

use crate::state::BoardState;
use crate::types::{BoardId, Column, ColumnId};
use kanban_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};

/// Append an empty column to a board
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateColumn {
    /// Id the new column will get; generated when the command is built
    #[serde(default)]
    pub id: ColumnId,
    /// The board that receives the column
    pub board_id: BoardId,
    /// The column title
    pub title: String,
}

impl CreateColumn {
    /// Create a new CreateColumn command
    pub fn new(board_id: impl Into<BoardId>, title: impl Into<String>) -> Self {
        Self {
            id: ColumnId::new(),
            board_id: board_id.into(),
            title: title.into(),
        }
    }
}

operation!(
    CreateColumn,
    verb = "create",
    noun = "column",
    description = "Append an empty column to a board"
);

impl Execute<BoardState> for CreateColumn {
    fn execute(&self, state: &BoardState) -> ExecutionResult<BoardState> {
        if state.find_column(&self.id).is_some() {
            return ExecutionResult::Unchanged;
        }
        let Some(index) = state.boards().iter().position(|b| b.id == self.board_id) else {
            return ExecutionResult::Unchanged;
        };

        let mut boards = state.boards().to_vec();
        let column = Column::new(&self.title, self.board_id.clone()).with_id(self.id.clone());
        boards[index].columns.push(column);

        ExecutionResult::Changed(state.successor(boards))
    }
}
