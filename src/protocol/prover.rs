//! Prover side of one protocol run.

use rand::{CryptoRng, Rng};

use crate::errors::ProtocolError;
use crate::group::CyclicGroup;
use crate::pedersen::Pedersen;
use crate::shuffle::{shuffle_commitments, Permutation, ShuffleRecord};

/// Holds a committed message batch and drives the shuffle side of a run.
///
/// Stateless beyond its construction parameters: every call to
/// [`shuffle_and_prove`][Prover::shuffle_and_prove] draws a fresh
/// permutation and fresh rerandomizers, independent of every other call.
#[derive(Debug, Clone)]
pub struct Prover<G: CyclicGroup> {
    ped: Pedersen<G>,
    messages: Vec<G::Exponent>,
    inputs: Vec<G::Element>,
    openings: Vec<G::Exponent>,
}

impl<G: CyclicGroup> Prover<G> {
    /// Builds a prover over an already-committed batch.
    ///
    /// The input commitments are recomputed from messages and openings, so
    /// they always satisfy the commitment invariant.
    pub fn new(
        ped: Pedersen<G>,
        messages: Vec<G::Exponent>,
        openings: Vec<G::Exponent>,
    ) -> Result<Prover<G>, ProtocolError> {
        if messages.is_empty() {
            return Err(ProtocolError::EmptyBatch);
        }
        if openings.len() != messages.len() {
            return Err(ProtocolError::LengthMismatch {
                expected: messages.len(),
                got: openings.len(),
            });
        }
        let inputs = messages
            .iter()
            .zip(openings.iter())
            .map(|(w, r)| ped.commit_with(w, r))
            .collect();
        Ok(Prover {
            ped,
            messages,
            inputs,
            openings,
        })
    }

    /// Commits a plaintext batch and builds the prover in one step.
    ///
    /// Returns the prover together with the input commitments handed to
    /// the verifier side.
    pub fn commit_messages<R: Rng + CryptoRng>(
        ped: Pedersen<G>,
        plaintexts: &[u64],
        rng: &mut R,
    ) -> Result<(Prover<G>, Vec<G::Element>), ProtocolError> {
        if plaintexts.is_empty() {
            return Err(ProtocolError::EmptyBatch);
        }
        let messages: Vec<_> = plaintexts
            .iter()
            .map(|&w| ped.group().exponent_from_u64(w))
            .collect();
        let mut inputs = Vec::with_capacity(messages.len());
        let mut openings = Vec::with_capacity(messages.len());
        for w in &messages {
            let (c, r) = ped.commit(w, rng);
            inputs.push(c);
            openings.push(r);
        }
        let prover = Prover {
            ped,
            messages,
            inputs: inputs.clone(),
            openings,
        };
        Ok((prover, inputs))
    }

    /// The input commitments of this batch.
    pub fn inputs(&self) -> &[G::Element] {
        &self.inputs
    }

    /// The openings of the input commitments.
    pub fn input_openings(&self) -> &[G::Exponent] {
        &self.openings
    }

    /// Runs one shuffle over the batch.
    ///
    /// Draws a fresh random permutation and one fresh rerandomizer per
    /// element, then recomputes the output commitments through the shuffle
    /// engine. The returned record is everything a verifier needs for
    /// subset checks: both commitment sets, both opening sets, and the
    /// permutation, all disclosed.
    pub fn shuffle_and_prove<R: Rng + CryptoRng>(
        &self,
        rng: &mut R,
    ) -> Result<ShuffleRecord<G>, ProtocolError> {
        let n = self.messages.len();
        let pi = Permutation::random(rng, n);
        let rerandomizers: Vec<_> = (0..n)
            .map(|_| self.ped.group().random_exponent(rng))
            .collect();
        let (outputs, permuted_messages, new_openings) =
            shuffle_commitments(&self.ped, &self.messages, &self.openings, &pi, &rerandomizers)?;
        Ok(ShuffleRecord::new(
            self.inputs.clone(),
            self.openings.clone(),
            outputs,
            new_openings,
            permuted_messages,
            pi,
        ))
    }
}
