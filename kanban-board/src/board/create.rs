//! CreateBoard command

use crate::state::BoardState;
use crate::types::{Board, BoardId};
use kanban_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};

/// Create a board with seed columns and make it active
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateBoard {
    /// Id the new board will get; generated when the command is built
    #[serde(default)]
    pub id: BoardId,
    /// The board title
    pub title: String,
    /// Titles of the empty columns the board starts with
    #[serde(default = "Board::default_column_titles")]
    pub columns: Vec<String>,
}

impl CreateBoard {
    /// Create a new CreateBoard command with the default seed columns
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: BoardId::new(),
            title: title.into(),
            columns: Board::default_column_titles(),
        }
    }

    /// Replace the seed column titles
    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }
}

operation!(
    CreateBoard,
    verb = "create",
    noun = "board",
    description = "Create a board with seed columns and select it"
);

impl Execute<BoardState> for CreateBoard {
    fn execute(&self, state: &BoardState) -> ExecutionResult<BoardState> {
        // Replaying the same command must not mint a second board with this id
        if state.board(&self.id).is_some() {
            return ExecutionResult::Unchanged;
        }

        let board = Board::new(&self.title, &self.columns).with_id(self.id.clone());
        let mut boards = state.boards().to_vec();
        boards.push(board);

        ExecutionResult::Changed(BoardState::from_boards(boards, Some(self.id.clone())))
    }
}
