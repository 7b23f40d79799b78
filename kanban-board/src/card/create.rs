//! CreateCard command

use crate::state::BoardState;
use crate::types::{Card, CardId, ColumnId};
use kanban_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};

/// Append a card to the end of a column
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateCard {
    /// Id the new card will get; generated when the command is built
    #[serde(default)]
    pub id: CardId,
    /// The column that receives the card
    pub column_id: ColumnId,
    /// The card title
    pub title: String,
    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreateCard {
    /// Create a new CreateCard command
    pub fn new(column_id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: CardId::new(),
            column_id: column_id.into(),
            title: title.into(),
            description: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

operation!(
    CreateCard,
    verb = "create",
    noun = "card",
    description = "Append a card to a column"
);

impl Execute<BoardState> for CreateCard {
    fn execute(&self, state: &BoardState) -> ExecutionResult<BoardState> {
        if state.find_card(&self.id).is_some() {
            return ExecutionResult::Unchanged;
        }
        let Some((b, c)) = state.locate_column(&self.column_id) else {
            return ExecutionResult::Unchanged;
        };

        let mut boards = state.boards().to_vec();
        let column = &mut boards[b].columns[c];
        let mut card = Card::new(&self.title, self.column_id.clone(), column.cards.len())
            .with_id(self.id.clone());
        card.description = self.description.clone();
        column.cards.push(card);

        ExecutionResult::Changed(state.successor(boards))
    }
}
