use thiserror::Error;

/// Validation errors raised by the shuffle protocol.
///
/// These cover malformed inputs only. A failed verification is never an
/// error: `verify` and the subset check report tampering as `false`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// An empty message batch was handed to the prover or shuffle engine.
    #[error("message batch must be non-empty")]
    EmptyBatch,

    /// An empty subset was handed to the consistency check.
    #[error("subset must be non-empty")]
    EmptySubset,

    /// Parallel inputs (messages, openings, rerandomizers, commitments)
    /// disagree with the permutation length.
    #[error("parallel input length mismatch: expected {expected}, got {got}")]
    LengthMismatch {
        /// Length required by the permutation.
        expected: usize,
        /// Length actually supplied.
        got: usize,
    },

    /// An index vector that is not a bijection on `{0..n-1}`.
    #[error("index vector is not a permutation")]
    InvalidPermutation,

    /// A subset index outside the committed batch.
    #[error("subset index {index} out of range for batch of {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The batch length.
        len: usize,
    },
}
