//! RenameColumn command

use crate::state::BoardState;
use crate::types::ColumnId;
use kanban_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};

/// Rename a column wherever it lives
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RenameColumn {
    /// The column to rename
    pub id: ColumnId,
    /// The new title
    pub title: String,
}

impl RenameColumn {
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

operation!(
    RenameColumn,
    verb = "rename",
    noun = "column",
    description = "Change a column's title"
);

impl Execute<BoardState> for RenameColumn {
    fn execute(&self, state: &BoardState) -> ExecutionResult<BoardState> {
        let Some((b, c)) = state.locate_column(&self.id) else {
            return ExecutionResult::Unchanged;
        };
        if state.boards()[b].columns[c].title == self.title {
            return ExecutionResult::Unchanged;
        }

        let mut boards = state.boards().to_vec();
        boards[b].columns[c].title = self.title.clone();

        ExecutionResult::Changed(state.successor(boards))
    }
}
