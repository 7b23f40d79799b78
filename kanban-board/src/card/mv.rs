//! MoveCard command

use crate::state::BoardState;
use crate::types::{CardId, ColumnId};
use kanban_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};

/// Move a card out of one column and into a position of another (or the same)
/// column.
///
/// The card is matched by id inside `source_column_id` only; its stored
/// `column_id` is not consulted. After insertion the destination column is
/// renumbered 0..n-1. The source column is not renumbered, so moving a card
/// out of the middle of a column leaves a gap there.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MoveCard {
    /// The card to move
    pub id: CardId,
    /// Column the card is taken from
    pub source_column_id: ColumnId,
    /// Column the card is inserted into
    pub destination_column_id: ColumnId,
    /// Insertion index in the destination; past the end appends
    pub order: usize,
}

impl MoveCard {
    /// Create a new MoveCard command
    pub fn new(
        id: impl Into<CardId>,
        source_column_id: impl Into<ColumnId>,
        destination_column_id: impl Into<ColumnId>,
        order: usize,
    ) -> Self {
        Self {
            id: id.into(),
            source_column_id: source_column_id.into(),
            destination_column_id: destination_column_id.into(),
            order,
        }
    }

    /// Move a card to the end of another column
    pub fn to_end(
        id: impl Into<CardId>,
        source_column_id: impl Into<ColumnId>,
        destination_column_id: impl Into<ColumnId>,
    ) -> Self {
        Self::new(id, source_column_id, destination_column_id, usize::MAX)
    }
}

operation!(
    MoveCard,
    verb = "move",
    noun = "card",
    description = "Move a card to a column and position"
);

impl Execute<BoardState> for MoveCard {
    fn execute(&self, state: &BoardState) -> ExecutionResult<BoardState> {
        let Some((sb, sc)) = state.locate_column(&self.source_column_id) else {
            return ExecutionResult::Unchanged;
        };
        let Some(k) = state.boards()[sb].columns[sc]
            .cards
            .iter()
            .position(|card| card.id == self.id)
        else {
            return ExecutionResult::Unchanged;
        };
        // An unknown destination must not swallow the card
        let Some((db, dc)) = state.locate_column(&self.destination_column_id) else {
            return ExecutionResult::Unchanged;
        };

        let mut boards = state.boards().to_vec();
        let mut card = boards[sb].columns[sc].cards.remove(k);
        card.column_id = self.destination_column_id.clone();

        let destination = &mut boards[db].columns[dc];
        let index = self.order.min(destination.cards.len());
        destination.cards.insert(index, card);
        destination.renumber();

        if boards.as_slice() == state.boards() {
            return ExecutionResult::Unchanged;
        }
        ExecutionResult::Changed(state.successor(boards))
    }
}
