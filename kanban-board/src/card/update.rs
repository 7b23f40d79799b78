//! UpdateCard command

use crate::state::BoardState;
use crate::types::CardId;
use kanban_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};

/// Fields of a card that may be edited. `order` and `column_id` are
/// deliberately absent; only moves change them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CardPatch {
    /// New title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New description (None = don't change, Some(None) = clear, Some(Some(x)) = set)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
}

impl CardPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Some(description.into()));
        self
    }

    /// Remove the description
    pub fn clear_description(mut self) -> Self {
        self.description = Some(None);
        self
    }

    /// True when the patch names no field at all
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }
}

/// Merge a patch into an existing card
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpdateCard {
    /// The card ID to update
    pub id: CardId,
    #[serde(flatten)]
    pub patch: CardPatch,
}

impl UpdateCard {
    /// Create a new UpdateCard command
    pub fn new(id: impl Into<CardId>, patch: CardPatch) -> Self {
        Self {
            id: id.into(),
            patch,
        }
    }
}

operation!(
    UpdateCard,
    verb = "update",
    noun = "card",
    description = "Edit a card's title or description"
);

impl Execute<BoardState> for UpdateCard {
    fn execute(&self, state: &BoardState) -> ExecutionResult<BoardState> {
        if self.patch.is_empty() {
            return ExecutionResult::Unchanged;
        }
        let Some((b, c, k)) = state.locate_card(&self.id) else {
            return ExecutionResult::Unchanged;
        };

        let mut boards = state.boards().to_vec();
        let card = &mut boards[b].columns[c].cards[k];
        if let Some(title) = &self.patch.title {
            card.title = title.clone();
        }
        if let Some(description) = &self.patch.description {
            card.description = description.clone();
        }

        if boards.as_slice() == state.boards() {
            return ExecutionResult::Unchanged;
        }
        ExecutionResult::Changed(state.successor(boards))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Board;

    fn sample_state() -> (BoardState, CardId) {
        let board = Board::sample();
        let card = board.columns[0].cards[0].id.clone();
        let id = board.id.clone();
        (BoardState::from_boards(vec![board], Some(id)), card)
    }

    #[test]
    fn test_update_title_keeps_identity_and_position() {
        let (state, card_id) = sample_state();
        let before = state.find_card(&card_id).unwrap().clone();

        let next = UpdateCard::new(&card_id, CardPatch::new().with_title("Learn Rust"))
            .execute(&state)
            .into_option()
            .unwrap();
        let after = next.find_card(&card_id).unwrap();

        assert_eq!(after.title, "Learn Rust");
        assert_eq!(after.id, before.id);
        assert_eq!(after.order, before.order);
        assert_eq!(after.column_id, before.column_id);
        assert_eq!(after.description, before.description);
    }

    #[test]
    fn test_clear_description() {
        let (state, card_id) = sample_state();
        let next = UpdateCard::new(&card_id, CardPatch::new().clear_description())
            .execute(&state)
            .into_option()
            .unwrap();
        assert!(next.find_card(&card_id).unwrap().description.is_none());
    }

    #[test]
    fn test_update_unknown_card_is_unchanged() {
        let (state, _) = sample_state();
        let cmd = UpdateCard::new("missing", CardPatch::new().with_title("Y"));
        assert!(!cmd.execute(&state).is_changed());
    }

    #[test]
    fn test_empty_or_identical_patch_is_unchanged() {
        let (state, card_id) = sample_state();
        assert!(!UpdateCard::new(&card_id, CardPatch::new())
            .execute(&state)
            .is_changed());
        assert!(!UpdateCard::new(&card_id, CardPatch::new().with_title("Learn React"))
            .execute(&state)
            .is_changed());
    }

    #[test]
    fn test_patch_deserializes_flattened() {
        let cmd: UpdateCard =
            serde_json::from_str(r#"{"id": "c1", "title": "New", "description": "Body"}"#).unwrap();
        assert_eq!(cmd.id.as_str(), "c1");
        assert_eq!(cmd.patch.title.as_deref(), Some("New"));
        assert_eq!(cmd.patch.description, Some(Some("Body".to_string())));
    }
}
