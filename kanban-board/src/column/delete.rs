//! DeleteColumn command

use crate::state::BoardState;
use crate::types::ColumnId;
use kanban_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};

/// Delete a column together with its cards
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeleteColumn {
    /// The column ID to delete
    pub id: ColumnId,
}

impl DeleteColumn {
    pub fn new(id: impl Into<ColumnId>) -> Self {
        Self { id: id.into() }
    }
}

operation!(
    DeleteColumn,
    verb = "delete",
    noun = "column",
    description = "Delete a column and all of its cards"
);

impl Execute<BoardState> for DeleteColumn {
    fn execute(&self, state: &BoardState) -> ExecutionResult<BoardState> {
        let Some((b, c)) = state.locate_column(&self.id) else {
            return ExecutionResult::Unchanged;
        };

        let mut boards = state.boards().to_vec();
        boards[b].columns.remove(c);

        ExecutionResult::Changed(state.successor(boards))
    }
}
