//! Core types for the kanban store

mod board;
mod card;
mod ids;

// Re-export all types
pub use board::{Board, BoardSummary, Column, DEFAULT_COLUMN_TITLES};
pub use card::{Card, Label};
pub use ids::{BoardId, CardId, ColumnId, LabelId};
