//! Card types: Card, Label

use super::ids::{CardId, ColumnId, LabelId};
use serde::{Deserialize, Serialize};

/// A card (task) on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Owning column
    pub column_id: ColumnId,
    /// Zero-based display position within the owning column
    pub order: usize,
    /// Carried for renderers; no store operation edits labels.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<Label>,
}

impl Card {
    /// Create a new card in the given column at the given position
    pub fn new(title: impl Into<String>, column_id: ColumnId, order: usize) -> Self {
        Self {
            id: CardId::new(),
            title: title.into(),
            description: None,
            column_id,
            order,
            labels: Vec::new(),
        }
    }

    /// Use a pre-generated id
    pub fn with_id(mut self, id: CardId) -> Self {
        self.id = id;
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A colored label shown on a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub id: LabelId,
    pub name: String,
    /// CSS color string, e.g. "#d73a4a"
    pub color: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_creation() {
        let column = ColumnId::from_string("todo");
        let card = Card::new("Write docs", column.clone(), 2).with_description("README first");
        assert_eq!(card.title, "Write docs");
        assert_eq!(card.column_id, column);
        assert_eq!(card.order, 2);
        assert_eq!(card.description.as_deref(), Some("README first"));
        assert!(card.labels.is_empty());
    }

    #[test]
    fn test_card_serialization_omits_empty_fields() {
        let card = Card::new("Plain", ColumnId::from_string("c"), 0);
        let value = serde_json::to_value(&card).unwrap();
        assert!(value.get("description").is_none());
        assert!(value.get("labels").is_none());
        assert_eq!(value["column_id"], "c");

        let parsed: Card = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, card);
    }

    #[test]
    fn test_labels_come_from_serialized_cards() {
        let card: Card = serde_json::from_str(
            r##"{"id":"k1","title":"Bug","column_id":"c","order":0,
                "labels":[{"id":"l1","name":"urgent","color":"#d73a4a"}]}"##,
        )
        .unwrap();
        assert_eq!(card.labels.len(), 1);
        assert_eq!(card.labels[0].id, LabelId::from_string("l1"));
        assert_eq!(card.labels[0].name, "urgent");
    }
}
