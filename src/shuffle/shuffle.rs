//! The commitment shuffle engine and the per-run shuffle record.

use serde::Serialize;
use tracing::debug;

use crate::errors::ProtocolError;
use crate::group::CyclicGroup;
use crate::pedersen::Pedersen;
use crate::shuffle::permutation::Permutation;

/// Permutes a batch of committed messages and rerandomizes the commitments.
///
/// Messages and openings are permuted in lockstep. Each output opening is
/// the permuted opening plus the rerandomizer of the *original* index:
/// `new_opening[j] = openings[perm[j]] + rerandomizers[perm[j]]` mod order.
/// Rerandomizers are keyed by pre-permutation identity, one per original
/// element, never by output position.
///
/// Output commitments are recomputed from scratch out of the permuted
/// message and the new opening. This is full-knowledge rerandomization:
/// producing a correct output requires the original opening, unlike a
/// homomorphic blinding of an opaque commitment.
///
/// Returns `(outputs, permuted_messages, new_openings)`.
pub fn shuffle_commitments<G: CyclicGroup>(
    ped: &Pedersen<G>,
    messages: &[G::Exponent],
    openings: &[G::Exponent],
    pi: &Permutation,
    rerandomizers: &[G::Exponent],
) -> Result<(Vec<G::Element>, Vec<G::Exponent>, Vec<G::Exponent>), ProtocolError> {
    let n = pi.len();
    if n == 0 {
        return Err(ProtocolError::EmptyBatch);
    }
    for len in [messages.len(), openings.len(), rerandomizers.len()] {
        if len != n {
            return Err(ProtocolError::LengthMismatch {
                expected: n,
                got: len,
            });
        }
    }

    let permuted_messages = pi.apply(messages)?;
    let permuted_openings = pi.apply(openings)?;

    let group = ped.group();
    let mut outputs = Vec::with_capacity(n);
    let mut new_openings = Vec::with_capacity(n);
    for j in 0..n {
        let source = pi.as_slice()[j];
        let new_opening = group.add_exponents(&permuted_openings[j], &rerandomizers[source]);
        outputs.push(ped.commit_with(&permuted_messages[j], &new_opening));
        new_openings.push(new_opening);
    }
    debug!(batch = n, "shuffled and rerandomized commitment batch");

    Ok((outputs, permuted_messages, new_openings))
}

/// One full protocol instance, as disclosed to the verifier.
///
/// Holds the original commitments and openings, the permuted and
/// rerandomized commitments and openings, the permuted messages, and the
/// permutation connecting the two sides. Created once per prover run,
/// borrowed read-only by the verifier, then dropped.
#[derive(Debug, Clone, Serialize)]
#[serde(bound(serialize = "G::Element: Serialize, G::Exponent: Serialize"))]
pub struct ShuffleRecord<G: CyclicGroup> {
    inputs: Vec<G::Element>,
    input_openings: Vec<G::Exponent>,
    outputs: Vec<G::Element>,
    output_openings: Vec<G::Exponent>,
    permuted_messages: Vec<G::Exponent>,
    pi: Permutation,
}

impl<G: CyclicGroup> ShuffleRecord<G> {
    /// Assembles a record from the two sides of a shuffle.
    pub fn new(
        inputs: Vec<G::Element>,
        input_openings: Vec<G::Exponent>,
        outputs: Vec<G::Element>,
        output_openings: Vec<G::Exponent>,
        permuted_messages: Vec<G::Exponent>,
        pi: Permutation,
    ) -> ShuffleRecord<G> {
        ShuffleRecord {
            inputs,
            input_openings,
            outputs,
            output_openings,
            permuted_messages,
            pi,
        }
    }

    /// The original commitments.
    pub fn inputs(&self) -> &[G::Element] {
        &self.inputs
    }

    /// The openings of the original commitments.
    pub fn input_openings(&self) -> &[G::Exponent] {
        &self.input_openings
    }

    /// The shuffled, rerandomized commitments.
    pub fn outputs(&self) -> &[G::Element] {
        &self.outputs
    }

    /// The openings of the shuffled commitments.
    pub fn output_openings(&self) -> &[G::Exponent] {
        &self.output_openings
    }

    /// The messages in shuffled order.
    pub fn permuted_messages(&self) -> &[G::Exponent] {
        &self.permuted_messages
    }

    /// The permutation connecting inputs to outputs.
    pub fn permutation(&self) -> &Permutation {
        &self.pi
    }
}

// ------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------
