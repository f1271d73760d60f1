//! Prover/Verifier orchestration.
//!
//! One protocol run walks Setup (parameters fixed), Commit (inputs
//! produced), Shuffle (outputs produced), Disclose (permutation and all
//! openings revealed), and Verify. Accept and Reject are terminal; a
//! Reject is a reported outcome, never retried.

pub mod prover;
pub mod verifier;

// Re-export
pub use self::{prover::Prover, verifier::Verifier};
