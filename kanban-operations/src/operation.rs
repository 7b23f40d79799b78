//! Operation metadata and execution traits

use crate::ExecutionResult;

/// Metadata every command carries: what it does and to which kind of entity.
pub trait Operation {
    /// The action, e.g. "create", "rename", "move"
    fn verb(&self) -> &'static str;

    /// The entity acted upon, e.g. "board", "column", "card"
    fn noun(&self) -> &'static str;

    /// Human-readable summary shown in help output
    fn description(&self) -> &'static str;

    /// Canonical op string used in activity logs ("move card")
    fn op_string(&self) -> String {
        format!("{} {}", self.verb(), self.noun())
    }
}

/// Implement [`Operation`] for a command struct.
///
/// ```ignore
/// operation!(MoveCard, verb = "move", noun = "card", description = "Move a card");
/// ```
#[macro_export]
macro_rules! operation {
    ($ty:ty, verb = $verb:literal, noun = $noun:literal, description = $desc:literal $(,)?) => {
        impl $crate::Operation for $ty {
            fn verb(&self) -> &'static str {
                $verb
            }

            fn noun(&self) -> &'static str {
                $noun
            }

            fn description(&self) -> &'static str {
                $desc
            }
        }
    };
}

/// Apply an operation to an immutable state.
///
/// Implementations never mutate `state`; a change is expressed by returning a
/// complete successor inside [`ExecutionResult::Changed`].
pub trait Execute<S>: Operation {
    fn execute(&self, state: &S) -> ExecutionResult<S>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Bump;

    crate::operation!(
        Bump,
        verb = "bump",
        noun = "counter",
        description = "Increment a counter below ten"
    );

    impl Execute<u32> for Bump {
        fn execute(&self, state: &u32) -> ExecutionResult<u32> {
            if *state >= 10 {
                ExecutionResult::Unchanged
            } else {
                ExecutionResult::Changed(state + 1)
            }
        }
    }

    #[test]
    fn test_op_string() {
        assert_eq!(Bump.op_string(), "bump counter");
        assert_eq!(Bump.description(), "Increment a counter below ten");
    }

    #[test]
    fn test_execute_changed_and_unchanged() {
        assert_eq!(Bump.execute(&1).into_option(), Some(2));
        assert!(!Bump.execute(&10).is_changed());
    }
}
