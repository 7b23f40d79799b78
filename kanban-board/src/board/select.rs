//! SelectBoard command

use crate::state::BoardState;
use crate::types::BoardId;
use kanban_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};

/// Make a board the active one; an unknown id clears the selection
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SelectBoard {
    /// The board to select
    pub id: BoardId,
}

impl SelectBoard {
    pub fn new(id: impl Into<BoardId>) -> Self {
        Self { id: id.into() }
    }
}

operation!(
    SelectBoard,
    verb = "select",
    noun = "board",
    description = "Set the active board"
);

impl Execute<BoardState> for SelectBoard {
    fn execute(&self, state: &BoardState) -> ExecutionResult<BoardState> {
        let selected = state.board(&self.id).map(|board| board.id.clone());
        if selected.as_ref() == state.active_board_id() {
            return ExecutionResult::Unchanged;
        }
        ExecutionResult::Changed(BoardState::from_boards(state.boards().to_vec(), selected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Board;

    fn two_boards() -> (BoardState, BoardId, BoardId) {
        let first = Board::sample();
        let second = Board::new("Second", Board::default_column_titles());
        let (a, b) = (first.id.clone(), second.id.clone());
        let state = BoardState::from_boards(vec![first, second], Some(a.clone()));
        (state, a, b)
    }

    #[test]
    fn test_select_existing_board() {
        let (state, _, b) = two_boards();
        let next = SelectBoard::new(&b).execute(&state).into_option().unwrap();
        assert_eq!(next.active_board().map(|board| &board.id), Some(&b));
        assert_eq!(next.boards(), state.boards());
    }

    #[test]
    fn test_select_unknown_board_clears_selection() {
        let (state, _, _) = two_boards();
        let next = SelectBoard::new("missing")
            .execute(&state)
            .into_option()
            .unwrap();
        assert!(next.active_board().is_none());
    }

    #[test]
    fn test_select_current_board_is_unchanged() {
        let (state, a, _) = two_boards();
        assert!(!SelectBoard::new(a).execute(&state).is_changed());
    }
}
