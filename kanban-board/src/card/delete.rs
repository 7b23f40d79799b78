//! DeleteCard command

use crate::state::BoardState;
use crate::types::CardId;
use kanban_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};

/// Delete a card from whichever column holds it.
///
/// Remaining siblings keep their `order` values, so the column may be left
/// with a gap (0, 2, ...) until the next move into it renumbers it.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeleteCard {
    /// The card ID to delete
    pub id: CardId,
}

impl DeleteCard {
    pub fn new(id: impl Into<CardId>) -> Self {
        Self { id: id.into() }
    }
}

operation!(
    DeleteCard,
    verb = "delete",
    noun = "card",
    description = "Delete a card"
);

impl Execute<BoardState> for DeleteCard {
    fn execute(&self, state: &BoardState) -> ExecutionResult<BoardState> {
        let Some((b, c, k)) = state.locate_card(&self.id) else {
            return ExecutionResult::Unchanged;
        };

        let mut boards = state.boards().to_vec();
        boards[b].columns[c].cards.remove(k);

        ExecutionResult::Changed(state.successor(boards))
    }
}
