//! The `commitment` module contains the API for producing and checking
//! Pedersen commitments over a [`CyclicGroup`] backend.

use rand::{CryptoRng, Rng};

use crate::group::CyclicGroup;

/// Pedersen commitment scheme over a cyclic group.
///
/// A commitment to message `w` under opening `r` is `g^w * h^r`. The scheme
/// is binding as long as the discrete log of `h` to base `g` is unknown;
/// the group parameters themselves are taken on trust.
#[derive(Debug, Clone)]
pub struct Pedersen<G: CyclicGroup> {
    group: G,
}

impl<G: CyclicGroup> Pedersen<G> {
    /// Wraps a group backend into a commitment scheme.
    pub fn new(group: G) -> Pedersen<G> {
        Pedersen { group }
    }

    /// The underlying group backend.
    pub fn group(&self) -> &G {
        &self.group
    }

    /// Commits to `message` under a freshly drawn opening.
    ///
    /// The opening is sampled uniformly from `[1, order - 1]` and returned
    /// alongside the commitment so the caller can open it later.
    pub fn commit<R: Rng + CryptoRng>(
        &self,
        message: &G::Exponent,
        rng: &mut R,
    ) -> (G::Element, G::Exponent) {
        let opening = self.group.random_exponent(rng);
        let commitment = self.commit_with(message, &opening);
        (commitment, opening)
    }

    /// Commits to `message` under the supplied opening.
    pub fn commit_with(&self, message: &G::Exponent, opening: &G::Exponent) -> G::Element {
        self.group
            .mul(&self.group.exp_g(message), &self.group.exp_h(opening))
    }

    /// Checks that `commitment` opens to `message` under `opening`.
    ///
    /// Pure recompute-and-compare; a mismatch yields `false`, never an error.
    pub fn verify(
        &self,
        commitment: &G::Element,
        message: &G::Exponent,
        opening: &G::Exponent,
    ) -> bool {
        *commitment == self.commit_with(message, opening)
    }
}

// ------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------
