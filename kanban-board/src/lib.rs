//! In-memory kanban board store
//!
//! This crate holds boards, their ordered columns and the cards inside those
//! columns, plus which board is currently active. Every mutation is a small
//! command struct that computes a complete successor state; the store swaps
//! that state in atomically, so readers never see a half-applied change.
//!
//! ## Overview
//!
//! - **Snapshots** - `BoardState` is immutable; the store hands out `Arc`s
//! - **Commands as values** - each operation is a serializable struct
//! - **Observable** - subscribers are notified once per committed change
//! - **No-ops are silent** - unknown ids and identical edits leave state alone
//!
//! ## Basic Usage
//!
//! ```rust
//! use kanban_board::BoardStore;
//!
//! let mut store = BoardStore::new();
//! let board = store.create_board("Roadmap");
//!
//! let todo = store.active_board().unwrap().columns[0].id.clone();
//! let done = store.active_board().unwrap().columns[2].id.clone();
//! let card = store.create_card(&todo, "Ship it", None).unwrap();
//!
//! store.move_card(&card, &todo, &done, 0);
//! assert_eq!(store.state().find_card(&card).unwrap().column_id, done);
//! assert_eq!(store.active_board().unwrap().id, board);
//! ```
//!
//! Commands can also be built and processed directly:
//!
//! ```rust
//! use kanban_board::{board::CreateBoard, BoardStore};
//!
//! let mut store = BoardStore::new();
//! let cmd = CreateBoard::new("Ops").with_columns(["Inbox", "Done"]);
//! assert!(store.process(&cmd));
//! assert_eq!(store.active_board().unwrap().columns.len(), 2);
//! ```

pub mod activity;
pub mod config;
pub mod drag;
mod error;
pub mod observer;
mod state;
mod store;
pub mod types;

// Command modules
pub mod board;
pub mod card;
pub mod column;

// Re-export Execute trait and types from operations crate
pub use kanban_operations::{Execute, ExecutionResult, LogEntry, Operation};

pub use activity::ActivityLog;
pub use config::StoreConfig;
pub use drag::{DraggableLocation, DropResult};
pub use error::{KanbanError, Result};
pub use observer::{BoardObserver, SubscriptionId};
pub use state::BoardState;
pub use store::BoardStore;

// Re-export commonly used types
pub use card::CardPatch;
pub use types::{Board, BoardId, BoardSummary, Card, CardId, Column, ColumnId, Label, LabelId};
