#![doc = include_str!("../README.md")]
#![doc(html_root_url = "https://docs.rs/ballotmix-rust/latest")]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![cfg_attr(docsrs, feature(doc_cfg))]

/// Cyclic group capability behind the protocol.
///
/// Defines the minimal group interface (fixed-base exponentiation on two
/// independent generators, element multiplication, exponent arithmetic mod
/// the group order) that the commitment scheme, shuffle engine, and subset
/// checker are written against, so the concrete backend can be swapped
/// without touching protocol logic.
pub mod group;

/// Validation error taxonomy shared across the crate.
pub mod errors;

/// Prime-order subgroup backend over integers mod p.
///
/// Implements [`group::CyclicGroup`] with `BigUint` residues and carries the
/// toy reference parameters used by tests, benchmarks, and the demo binary.
pub mod zp;

/// Pedersen commitment scheme implementation.
///
/// Binds a message to a single group element under a randomness opening,
/// computed as `g^message * h^opening`. Computationally binding under the
/// discrete-log assumption on the supplied group.
pub mod pedersen;

/// Permutation handling, the commitment shuffle engine, and the subset
/// consistency checker.
///
/// A shuffle permutes a batch of committed messages and produces freshly
/// rerandomized commitments; the subset checker relates a chosen subset of
/// original commitments to the shuffled set through the disclosed
/// permutation and opening differences.
pub mod shuffle;

/// Prover/Verifier orchestration for one protocol run.
///
/// Drives the commitment scheme, shuffle engine, and subset checker in
/// sequence: Setup, Commit, Shuffle, Disclose, Verify.
pub mod protocol;

// Re-export commonly used types for convenience
pub use errors::ProtocolError;
pub use group::CyclicGroup;
pub use pedersen::Pedersen;
pub use protocol::{Prover, Verifier};
pub use shuffle::{shuffle_commitments, subset_check, Permutation, ShuffleRecord};
pub use zp::ZpGroup;
