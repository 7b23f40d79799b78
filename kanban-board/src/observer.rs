//! Change notification for renderers

use crate::state::BoardState;
use kanban_operations::LogEntry;
use std::sync::Arc;

/// Callback trait for anything that re-renders from store state
pub trait BoardObserver {
    /// Called once per committed change with the new snapshot and the
    /// activity entry that produced it. Never called for no-ops.
    fn on_state_changed(&self, state: &Arc<BoardState>, entry: &LogEntry);
}

impl<F> BoardObserver for F
where
    F: Fn(&Arc<BoardState>, &LogEntry),
{
    fn on_state_changed(&self, state: &Arc<BoardState>, entry: &LogEntry) {
        self(state, entry)
    }
}

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);
