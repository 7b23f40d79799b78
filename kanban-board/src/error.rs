//! Error types for the kanban store
//!
//! Store operations themselves never fail; these errors cover integrity
//! verification, configuration loading and input parsing at the edges.

use thiserror::Error;

/// Result alias used at the fallible edges of the store
pub type Result<T> = std::result::Result<T, KanbanError>;

/// Errors that can occur around the kanban store
#[derive(Debug, Error)]
pub enum KanbanError {
    /// Column points at a board that does not hold it
    #[error("column {column} references board {board}, which does not contain it")]
    DanglingColumn { column: String, board: String },

    /// Card points at a column that does not hold it
    #[error("card {card} references column {column}, which does not contain it")]
    DanglingCard { card: String, column: String },

    /// Same id used twice
    #[error("{item_type} id {id} is used more than once")]
    DuplicateId { item_type: String, id: String },

    /// Active board id is not in the collection
    #[error("active board {id} is not in the board collection")]
    ActiveBoardMissing { id: String },

    /// Console input that is not a valid command
    #[error("cannot parse input: {message}")]
    Parse { message: String },

    /// A value was well-formed but out of range or blank
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] figment::Error),

    /// Snapshot could not be rendered as JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl KanbanError {
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn duplicate_id(item_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::DuplicateId {
            item_type: item_type.into(),
            id: id.into(),
        }
    }
}
