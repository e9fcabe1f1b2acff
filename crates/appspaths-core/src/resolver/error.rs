//! Resolver error type.

/// Error returned by [`resolve`](super::resolve) when its inputs are unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// An input was empty or malformed (e.g. an empty server root).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
