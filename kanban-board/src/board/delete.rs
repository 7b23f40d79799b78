//! DeleteBoard command

use crate::state::BoardState;
use crate::types::BoardId;
use kanban_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};

/// Delete a board with all of its columns and cards
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeleteBoard {
    /// The board to delete
    pub id: BoardId,
}

impl DeleteBoard {
    pub fn new(id: impl Into<BoardId>) -> Self {
        Self { id: id.into() }
    }
}

operation!(
    DeleteBoard,
    verb = "delete",
    noun = "board",
    description = "Delete a board and everything on it"
);

impl Execute<BoardState> for DeleteBoard {
    fn execute(&self, state: &BoardState) -> ExecutionResult<BoardState> {
        if state.board(&self.id).is_none() {
            return ExecutionResult::Unchanged;
        }

        let boards: Vec<_> = state
            .boards()
            .iter()
            .filter(|board| board.id != self.id)
            .cloned()
            .collect();

        // Deleting the active board falls back to the first remaining one
        let active = if state.active_board_id() == Some(&self.id) {
            boards.first().map(|board| board.id.clone())
        } else {
            state.active_board_id().cloned()
        };

        ExecutionResult::Changed(BoardState::from_boards(boards, active))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Board;

    fn three_boards(active: usize) -> (BoardState, Vec<BoardId>) {
        let boards: Vec<Board> = ["A", "B", "C"]
            .into_iter()
            .map(|t| Board::new(t, Board::default_column_titles()))
            .collect();
        let ids: Vec<BoardId> = boards.iter().map(|b| b.id.clone()).collect();
        let state = BoardState::from_boards(boards, Some(ids[active].clone()));
        (state, ids)
    }

    #[test]
    fn test_delete_active_board_selects_first_remaining() {
        let (state, ids) = three_boards(1);
        let next = DeleteBoard::new(&ids[1]).execute(&state).into_option().unwrap();
        assert_eq!(next.boards().len(), 2);
        assert_eq!(next.active_board_id(), Some(&ids[0]));
    }

    #[test]
    fn test_delete_first_active_board_selects_new_first() {
        let (state, ids) = three_boards(0);
        let next = DeleteBoard::new(&ids[0]).execute(&state).into_option().unwrap();
        assert_eq!(next.active_board_id(), Some(&ids[1]));
    }

    #[test]
    fn test_delete_inactive_board_keeps_selection() {
        let (state, ids) = three_boards(2);
        let next = DeleteBoard::new(&ids[0]).execute(&state).into_option().unwrap();
        assert_eq!(next.active_board_id(), Some(&ids[2]));
    }

    #[test]
    fn test_delete_only_board_clears_everything() {
        let board = Board::sample();
        let id = board.id.clone();
        let state = BoardState::from_boards(vec![board], Some(id.clone()));

        let next = DeleteBoard::new(id).execute(&state).into_option().unwrap();
        assert!(next.boards().is_empty());
        assert!(next.active_board().is_none());
    }

    #[test]
    fn test_delete_unknown_board_is_unchanged() {
        let (state, _) = three_boards(0);
        assert!(!DeleteBoard::new("missing").execute(&state).is_changed());
    }
}
