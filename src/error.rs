//! Error types for myqb.

use thiserror::Error;

/// Result type alias for statement building.
pub type BuildResult<T> = Result<T, BuildError>;

/// Errors surfaced while building or rendering a statement.
///
/// These all signal programming errors at the call site, not runtime
/// conditions: a given tree renders identically on every call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    /// A fragment whose `?` count does not match its bound values.
    #[error(
        "malformed predicate '{fragment}': {placeholders} placeholder(s) but {values} value(s)"
    )]
    MalformedPredicate {
        fragment: String,
        placeholders: usize,
        values: usize,
    },

    /// UPDATE rendered with an empty SET list.
    #[error("UPDATE {table}: SET list is empty")]
    EmptySet { table: String },
}
