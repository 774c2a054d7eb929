use thiserror::Error;

/// Errors surfaced by the construction layer.
///
/// Every variant is a local precondition violation detected at the call
/// boundary; none is retried or recovered from.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FarfalleError {
    /// The round-constant table does not hold exactly four constants per
    /// round.
    #[error("round constant table has {actual} entries, expected {expected}")]
    RoundConstantCount { expected: usize, actual: usize },

    /// The master key has more elements than the key state has coordinates.
    #[error("master key has {len} elements, the key state holds at most 4")]
    MasterKeyTooLong { len: usize },

    /// The recomputed authentication tag does not match the one presented.
    #[error("authentication tag mismatch")]
    TagMismatch,
}
