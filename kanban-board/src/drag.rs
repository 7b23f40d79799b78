//! Drag-and-drop results and their translation into moves

use crate::card::MoveCard;
use crate::store::BoardStore;
use crate::types::{CardId, ColumnId};
use serde::{Deserialize, Serialize};

/// A position in a droppable column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraggableLocation {
    pub droppable_id: ColumnId,
    pub index: usize,
}

impl DraggableLocation {
    pub fn new(droppable_id: impl Into<ColumnId>, index: usize) -> Self {
        Self {
            droppable_id: droppable_id.into(),
            index,
        }
    }
}

/// What a drag library reports when a card is released
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropResult {
    /// The dragged card
    pub draggable_id: CardId,
    pub source: DraggableLocation,
    /// None when the card was dropped outside any column
    #[serde(default)]
    pub destination: Option<DraggableLocation>,
}

impl DropResult {
    pub fn new(
        draggable_id: impl Into<CardId>,
        source: DraggableLocation,
        destination: Option<DraggableLocation>,
    ) -> Self {
        Self {
            draggable_id: draggable_id.into(),
            source,
            destination,
        }
    }
}

impl MoveCard {
    /// Translate a drop into a move.
    ///
    /// Returns None when the card was dropped outside a column or released
    /// where it started.
    pub fn from_drop(result: &DropResult) -> Option<Self> {
        let destination = result.destination.as_ref()?;
        if *destination == result.source {
            return None;
        }
        Some(Self::new(
            &result.draggable_id,
            &result.source.droppable_id,
            &destination.droppable_id,
            destination.index,
        ))
    }
}

impl BoardStore {
    /// Apply a drop reported by the drag controller.
    ///
    /// Returns true if the store changed.
    pub fn handle_drag_end(&mut self, result: &DropResult) -> bool {
        match MoveCard::from_drop(result) {
            Some(cmd) => self.process(&cmd),
            None => {
                tracing::debug!(card = %result.draggable_id, "drop ignored");
                false
            }
        }
    }
}
