//! Execution result types for operations

/// Result of executing an operation
///
/// Operations are total: an unknown id is not an error, it simply leaves the
/// state as it was.
#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionResult<S> {
    /// Operation produced a new state that should replace the current one
    Changed(S),
    /// Nothing to do (unknown id, or the state already matched)
    Unchanged,
}

impl<S> ExecutionResult<S> {
    /// Extract the successor state, if any
    pub fn into_option(self) -> Option<S> {
        match self {
            Self::Changed(state) => Some(state),
            Self::Unchanged => None,
        }
    }

    /// Check whether the operation changed anything
    pub fn is_changed(&self) -> bool {
        matches!(self, Self::Changed(_))
    }
}
