//! Board-level types: Board, Column, BoardSummary

use super::card::Card;
use super::ids::{BoardId, CardId, ColumnId};
use serde::{Deserialize, Serialize};

/// Column titles every new board starts with
pub const DEFAULT_COLUMN_TITLES: [&str; 3] = ["To Do", "In Progress", "Done"];

/// A kanban board: a title and its ordered columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub title: String,
    #[serde(default)]
    pub columns: Vec<Column>,
}

impl Board {
    /// Create a new board with one empty column per seed title
    pub fn new<I, S>(title: impl Into<String>, column_titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let id = BoardId::new();
        let columns = column_titles
            .into_iter()
            .map(|t| Column::new(t, id.clone()))
            .collect();
        Self {
            id,
            title: title.into(),
            columns,
        }
    }

    /// Use a pre-generated id, re-pointing every column at it
    pub fn with_id(mut self, id: BoardId) -> Self {
        for column in &mut self.columns {
            column.board_id = id.clone();
        }
        self.id = id;
        self
    }

    /// Get the default column titles for a new board
    pub fn default_column_titles() -> Vec<String> {
        DEFAULT_COLUMN_TITLES.iter().map(|t| t.to_string()).collect()
    }

    /// The board a fresh store shows when sample data is requested
    pub fn sample() -> Self {
        let mut board = Self::new("My First Board", DEFAULT_COLUMN_TITLES);
        if let Some(todo) = board.columns.first_mut() {
            let card = Card::new("Learn React", todo.id.clone(), 0)
                .with_description("Study React fundamentals");
            todo.cards.push(card);
        }
        board
    }

    /// Find a column by id
    pub fn find_column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == id)
    }

    /// Find a card anywhere on this board
    pub fn find_card(&self, id: &CardId) -> Option<&Card> {
        self.columns.iter().find_map(|c| c.find_card(id))
    }

    /// Total number of cards across all columns
    pub fn card_count(&self) -> usize {
        self.columns.iter().map(|c| c.cards.len()).sum()
    }

    /// Counts shown in a board list
    pub fn summary(&self) -> BoardSummary {
        BoardSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            column_count: self.columns.len(),
            card_count: self.card_count(),
        }
    }
}

/// A column: a named, ordered bucket of cards within one board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    /// Owning board
    pub board_id: BoardId,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl Column {
    /// Create a new, empty column on the given board
    pub fn new(title: impl Into<String>, board_id: BoardId) -> Self {
        Self {
            id: ColumnId::new(),
            title: title.into(),
            board_id,
            cards: Vec::new(),
        }
    }

    /// Use a pre-generated id, re-pointing every card at it
    pub fn with_id(mut self, id: ColumnId) -> Self {
        for card in &mut self.cards {
            card.column_id = id.clone();
        }
        self.id = id;
        self
    }

    /// Find a card by id
    pub fn find_card(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|c| &c.id == id)
    }

    /// Cards sorted by `order`, ties kept in sequence order
    pub fn cards_in_display_order(&self) -> Vec<&Card> {
        let mut cards: Vec<&Card> = self.cards.iter().collect();
        cards.sort_by_key(|c| c.order);
        cards
    }

    /// Assign `order` = sequence index to every card
    pub fn renumber(&mut self) {
        for (index, card) in self.cards.iter_mut().enumerate() {
            card.order = index;
        }
    }

    /// True when the orders are exactly 0..n-1 in sequence order
    pub fn has_dense_order(&self) -> bool {
        self.cards
            .iter()
            .enumerate()
            .all(|(index, card)| card.order == index)
    }
}

/// Board-list row: identity plus counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSummary {
    pub id: BoardId,
    pub title: String,
    pub column_count: usize,
    pub card_count: usize,
}
