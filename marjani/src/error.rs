//! Error types for Marjani

/// Result type alias
pub type Result<T> = std::result::Result<T, NavError>;

/// Navigation errors.
///
/// Both variants are fatal: they mean the engine's own bookkeeping is
/// inconsistent. Running out of battery, steps or dirt is a normal
/// [`ExitCondition`](crate::ExitCondition), not an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    /// Retrace requested with no recorded moves
    #[error("Path stack is empty")]
    EmptyPathStack,

    /// Position, map and path stack disagree
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}
