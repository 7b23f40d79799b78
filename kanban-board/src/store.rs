//! BoardStore - the mutable container every view reads from
//!
//! All mutations funnel through [`BoardStore::process`]: the command computes
//! a complete successor [`BoardState`], the store swaps it in with a single
//! assignment, records an activity entry and notifies observers. Readers only
//! ever see whole snapshots.

use crate::activity::ActivityLog;
use crate::board::{CreateBoard, DeleteBoard, RenameBoard, SelectBoard};
use crate::card::{CardPatch, CreateCard, DeleteCard, MoveCard, UpdateCard};
use crate::column::{CreateColumn, DeleteColumn, RenameColumn};
use crate::config::StoreConfig;
use crate::observer::{BoardObserver, SubscriptionId};
use crate::state::BoardState;
use crate::types::{Board, BoardId, CardId, ColumnId};
use kanban_operations::{Execute, ExecutionResult, LogEntry};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

/// In-memory store of boards plus the active-board selection
pub struct BoardStore {
    state: Arc<BoardState>,
    config: StoreConfig,
    activity: ActivityLog,
    observers: Vec<(SubscriptionId, Box<dyn BoardObserver>)>,
    next_subscription: u64,
}

impl BoardStore {
    /// An empty store with default configuration
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// A store seeded with the sample board, which starts out active
    pub fn with_sample_data() -> Self {
        Self::with_config(StoreConfig::default().with_sample_board(true))
    }

    /// A store using the given configuration
    pub fn with_config(config: StoreConfig) -> Self {
        let state = if config.sample_board {
            let board = Board::sample();
            let id = board.id.clone();
            BoardState::from_boards(vec![board], Some(id))
        } else {
            BoardState::new()
        };

        Self {
            state: Arc::new(state),
            activity: ActivityLog::new(config.activity_limit),
            config,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Shared handle to the current snapshot; it never changes underneath
    /// the holder.
    pub fn snapshot(&self) -> Arc<BoardState> {
        Arc::clone(&self.state)
    }

    /// Borrow the current state
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// All boards in creation order
    pub fn boards(&self) -> &[Board] {
        self.state.boards()
    }

    /// The active board, if any
    pub fn active_board(&self) -> Option<&Board> {
        self.state.active_board()
    }

    /// Default title for the next board
    pub fn next_board_title(&self) -> String {
        self.state.next_board_title()
    }

    /// Operations that changed state, newest first
    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    // =========================================================================
    // Observers
    // =========================================================================

    /// Register an observer for committed changes
    pub fn subscribe(&mut self, observer: impl BoardObserver + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer; returns false if it was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    // =========================================================================
    // Processing
    // =========================================================================

    /// Execute a command against the current snapshot and commit the result.
    ///
    /// Returns true if the state changed.
    pub fn process<O>(&mut self, op: &O) -> bool
    where
        O: Execute<BoardState> + Serialize,
    {
        let start = Instant::now();
        match op.execute(&self.state) {
            ExecutionResult::Unchanged => {
                tracing::debug!(op = %op.op_string(), "no change");
                false
            }
            ExecutionResult::Changed(next) => {
                let mut entry = LogEntry::for_operation(op, start.elapsed());
                if let Some(actor) = &self.config.actor {
                    entry = entry.with_actor(actor);
                }
                self.commit(next, entry);
                true
            }
        }
    }

    /// The one place state is replaced
    fn commit(&mut self, next: BoardState, entry: LogEntry) {
        if let Err(error) = next.check_integrity() {
            tracing::error!(%error, op = %entry.op, "store integrity violated");
        }

        self.state = Arc::new(next);
        tracing::info!(
            op = %entry.op,
            boards = self.state.boards().len(),
            active = ?self.state.active_board_id(),
            "committed"
        );

        for (_, observer) in &self.observers {
            observer.on_state_changed(&self.state, &entry);
        }
        self.activity.push(entry);
    }

    // =========================================================================
    // Board operations
    // =========================================================================

    /// Select a board; an unknown id leaves nothing selected
    pub fn select_board(&mut self, id: impl Into<BoardId>) -> bool {
        self.process(&SelectBoard::new(id))
    }

    /// Create a board with the configured seed columns and select it
    pub fn create_board(&mut self, title: impl Into<String>) -> BoardId {
        let cmd = CreateBoard::new(title).with_columns(self.config.seed_columns.clone());
        self.process(&cmd);
        cmd.id
    }

    pub fn rename_board(&mut self, id: impl Into<BoardId>, title: impl Into<String>) -> bool {
        self.process(&RenameBoard::new(id, title))
    }

    pub fn delete_board(&mut self, id: impl Into<BoardId>) -> bool {
        self.process(&DeleteBoard::new(id))
    }

    // =========================================================================
    // Column operations
    // =========================================================================

    /// Append an empty column; None if the board does not exist
    pub fn create_column(
        &mut self,
        board_id: impl Into<BoardId>,
        title: impl Into<String>,
    ) -> Option<ColumnId> {
        let cmd = CreateColumn::new(board_id, title);
        self.process(&cmd).then_some(cmd.id)
    }

    pub fn rename_column(&mut self, id: impl Into<ColumnId>, title: impl Into<String>) -> bool {
        self.process(&RenameColumn::new(id, title))
    }

    pub fn delete_column(&mut self, id: impl Into<ColumnId>) -> bool {
        self.process(&DeleteColumn::new(id))
    }

    // =========================================================================
    // Card operations
    // =========================================================================

    /// Append a card to a column; None if the column does not exist
    pub fn create_card(
        &mut self,
        column_id: impl Into<ColumnId>,
        title: impl Into<String>,
        description: Option<String>,
    ) -> Option<CardId> {
        let mut cmd = CreateCard::new(column_id, title);
        cmd.description = description;
        self.process(&cmd).then_some(cmd.id)
    }

    pub fn update_card(&mut self, id: impl Into<CardId>, patch: CardPatch) -> bool {
        self.process(&UpdateCard::new(id, patch))
    }

    pub fn delete_card(&mut self, id: impl Into<CardId>) -> bool {
        self.process(&DeleteCard::new(id))
    }

    pub fn move_card(
        &mut self,
        id: impl Into<CardId>,
        source_column_id: impl Into<ColumnId>,
        destination_column_id: impl Into<ColumnId>,
        order: usize,
    ) -> bool {
        self.process(&MoveCard::new(
            id,
            source_column_id,
            destination_column_id,
            order,
        ))
    }
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BoardStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoardStore")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("activity", &self.activity.len())
            .field("observers", &self.observers.len())
            .finish()
    }
}
