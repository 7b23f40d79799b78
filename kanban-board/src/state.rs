//! BoardState - one immutable snapshot of every board plus the selection
//!
//! The active board is stored as an id and resolved against `boards` on every
//! read, so it can never drift from the collection.

use crate::error::{KanbanError, Result};
use crate::types::{Board, BoardId, BoardSummary, Card, CardId, Column, ColumnId};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;

/// A complete, consistent view of the store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BoardState {
    boards: Vec<Board>,
    active_board_id: Option<BoardId>,
}

impl BoardState {
    /// An empty state: no boards, nothing selected
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a state from boards and a requested selection.
    ///
    /// The selection is dropped if it names a board not in `boards`.
    pub fn from_boards(boards: Vec<Board>, active_board_id: Option<BoardId>) -> Self {
        let active_board_id =
            active_board_id.filter(|id| boards.iter().any(|board| &board.id == id));
        Self {
            boards,
            active_board_id,
        }
    }

    /// Successor state after a change to the collection, keeping the current
    /// selection if its board still exists.
    pub(crate) fn successor(&self, boards: Vec<Board>) -> Self {
        Self::from_boards(boards, self.active_board_id.clone())
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// All boards in creation order
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Id of the active board, if any
    pub fn active_board_id(&self) -> Option<&BoardId> {
        self.active_board_id.as_ref()
    }

    /// The active board, resolved from the collection
    pub fn active_board(&self) -> Option<&Board> {
        self.active_board_id.as_ref().and_then(|id| self.board(id))
    }

    /// Find a board by id
    pub fn board(&self, id: &BoardId) -> Option<&Board> {
        self.boards.iter().find(|b| &b.id == id)
    }

    /// Find a column on any board
    pub fn find_column(&self, id: &ColumnId) -> Option<&Column> {
        self.boards.iter().find_map(|b| b.find_column(id))
    }

    /// Find a card on any board
    pub fn find_card(&self, id: &CardId) -> Option<&Card> {
        self.boards.iter().find_map(|b| b.find_card(id))
    }

    /// Position of a column as (board index, column index)
    pub(crate) fn locate_column(&self, id: &ColumnId) -> Option<(usize, usize)> {
        self.boards.iter().enumerate().find_map(|(b, board)| {
            board
                .columns
                .iter()
                .position(|column| &column.id == id)
                .map(|c| (b, c))
        })
    }

    /// Position of a card as (board index, column index, card index)
    pub(crate) fn locate_card(&self, id: &CardId) -> Option<(usize, usize, usize)> {
        self.boards.iter().enumerate().find_map(|(b, board)| {
            board.columns.iter().enumerate().find_map(|(c, column)| {
                column
                    .cards
                    .iter()
                    .position(|card| &card.id == id)
                    .map(|k| (b, c, k))
            })
        })
    }

    /// One summary row per board, in collection order
    pub fn summaries(&self) -> Vec<BoardSummary> {
        self.boards.iter().map(Board::summary).collect()
    }

    /// Default title for the next board ("New Board 3" when two exist)
    pub fn next_board_title(&self) -> String {
        format!("New Board {}", self.boards.len() + 1)
    }

    /// JSON view for renderers
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    // =========================================================================
    // Integrity
    // =========================================================================

    /// Verify ids are unique, back-references point at the containing parent,
    /// and the selection names an existing board.
    ///
    /// Card order density is not checked here: deleting a card leaves gaps.
    pub fn check_integrity(&self) -> Result<()> {
        let mut board_ids = HashSet::new();
        let mut column_ids = HashSet::new();
        let mut card_ids = HashSet::new();

        for board in &self.boards {
            if !board_ids.insert(&board.id) {
                return Err(KanbanError::duplicate_id("board", board.id.as_str()));
            }
            for column in &board.columns {
                if !column_ids.insert(&column.id) {
                    return Err(KanbanError::duplicate_id("column", column.id.as_str()));
                }
                if column.board_id != board.id {
                    return Err(KanbanError::DanglingColumn {
                        column: column.id.to_string(),
                        board: column.board_id.to_string(),
                    });
                }
                for card in &column.cards {
                    if !card_ids.insert(&card.id) {
                        return Err(KanbanError::duplicate_id("card", card.id.as_str()));
                    }
                    if card.column_id != column.id {
                        return Err(KanbanError::DanglingCard {
                            card: card.id.to_string(),
                            column: card.column_id.to_string(),
                        });
                    }
                }
            }
        }

        if let Some(id) = &self.active_board_id {
            if !board_ids.contains(id) {
                return Err(KanbanError::ActiveBoardMissing { id: id.to_string() });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DEFAULT_COLUMN_TITLES;

    #[test]
    fn test_from_boards_drops_unknown_selection() {
        let board = Board::new("A", DEFAULT_COLUMN_TITLES);
        let state = BoardState::from_boards(vec![board], Some(BoardId::from_string("nope")));
        assert!(state.active_board_id().is_none());
        assert!(state.active_board().is_none());
    }

    #[test]
    fn test_active_board_resolves_from_collection() {
        let board = Board::new("A", DEFAULT_COLUMN_TITLES);
        let id = board.id.clone();
        let state = BoardState::from_boards(vec![board], Some(id.clone()));

        let mut boards = state.boards().to_vec();
        boards[0].title = "Renamed".into();
        let next = state.successor(boards);

        assert_eq!(next.active_board().map(|b| b.title.as_str()), Some("Renamed"));
        assert_eq!(next.active_board_id(), Some(&id));
    }

    #[test]
    fn test_next_board_title() {
        let state = BoardState::from_boards(vec![Board::sample()], None);
        assert_eq!(state.next_board_title(), "New Board 2");
        assert_eq!(BoardState::new().next_board_title(), "New Board 1");
    }

    #[test]
    fn test_check_integrity_accepts_sample() {
        let state = BoardState::from_boards(vec![Board::sample()], None);
        assert!(state.check_integrity().is_ok());
    }

    #[test]
    fn test_check_integrity_detects_dangling_card() {
        let mut board = Board::sample();
        board.columns[0].cards[0].column_id = ColumnId::from_string("gone");
        let state = BoardState::from_boards(vec![board], None);

        let err = state.check_integrity().unwrap_err();
        assert!(matches!(err, KanbanError::DanglingCard { .. }));
    }

    #[test]
    fn test_check_integrity_detects_duplicate_column() {
        let mut board = Board::new("A", ["One", "Two"]);
        let dup = board.columns[0].id.clone();
        board.columns[1].id = dup;
        let state = BoardState::from_boards(vec![board], None);

        assert!(matches!(
            state.check_integrity(),
            Err(KanbanError::DuplicateId { .. })
        ));
    }

    #[test]
    fn test_to_value_shape() {
        let board = Board::sample();
        let id = board.id.clone();
        let state = BoardState::from_boards(vec![board], Some(id.clone()));
        let value = state.to_value().unwrap();
        assert_eq!(value["active_board_id"], id.as_str());
        assert_eq!(value["boards"][0]["title"], "My First Board");
    }
}
