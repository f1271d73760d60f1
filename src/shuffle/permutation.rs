//! Validated permutations over the index set `{0..n-1}`.

use rand::{CryptoRng, Rng};
use serde::Serialize;

use crate::errors::ProtocolError;

/// A bijection on `{0..n-1}`, stored as a plain index vector.
///
/// Entry `j` names the input position feeding output position `j`, so
/// applying the permutation computes `out[j] = values[perm[j]]`.
/// Construction is validated: every index appears exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Permutation {
    indices: Vec<usize>,
}

impl Permutation {
    /// Draws a uniformly random permutation of length `n`.
    pub fn random<R: Rng + CryptoRng>(rng: &mut R, n: usize) -> Permutation {
        let mut indices: Vec<usize> = (0..n).collect();
        for i in (1..indices.len()).rev() {
            // invariant: elements with index > i have been locked in place.
            indices.swap(i, rng.gen_range(0..=i));
        }
        Permutation { indices }
    }

    /// The identity permutation of length `n`.
    pub fn identity(n: usize) -> Permutation {
        Permutation {
            indices: (0..n).collect(),
        }
    }

    /// Wraps an index vector, rejecting anything that is not a bijection.
    pub fn from_vec(indices: Vec<usize>) -> Result<Permutation, ProtocolError> {
        let mut seen = vec![false; indices.len()];
        for &index in &indices {
            if index >= indices.len() || seen[index] {
                return Err(ProtocolError::InvalidPermutation);
            }
            seen[index] = true;
        }
        Ok(Permutation { indices })
    }

    /// Number of positions the permutation acts on.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether the permutation acts on zero positions.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The raw index vector.
    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }

    /// The inverse bijection. `inverse[i]` is the output position that
    /// original index `i` landed on, so `perm[inverse[i]] == i`.
    pub fn invert(&self) -> Permutation {
        let mut inverse = vec![0; self.indices.len()];
        for (j, &i) in self.indices.iter().enumerate() {
            inverse[i] = j;
        }
        Permutation { indices: inverse }
    }

    /// Applies the permutation to a value slice, `out[j] = values[perm[j]]`.
    pub fn apply<T: Clone>(&self, values: &[T]) -> Result<Vec<T>, ProtocolError> {
        if values.len() != self.indices.len() {
            return Err(ProtocolError::LengthMismatch {
                expected: self.indices.len(),
                got: values.len(),
            });
        }
        Ok(self.indices.iter().map(|&i| values[i].clone()).collect())
    }
}

// ------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::{OsRng, StdRng};
    use rand::SeedableRng;

    #[test]
    fn apply_permutation() {
        let messages = vec![10u64, 20, 30, 40, 50];
        let pi = Permutation::from_vec(vec![2, 0, 4, 1, 3]).unwrap();
        let expected = vec![30u64, 10, 50, 20, 40];
        assert_eq!(pi.apply(&messages).unwrap(), expected);
    }

    #[test]
    fn from_vec_rejects_repeats_and_gaps() {
        assert_eq!(
            Permutation::from_vec(vec![0, 0, 1]),
            Err(ProtocolError::InvalidPermutation)
        );
        assert_eq!(
            Permutation::from_vec(vec![0, 3]),
            Err(ProtocolError::InvalidPermutation)
        );
        assert!(Permutation::from_vec(vec![1, 0, 2]).is_ok());
    }

    #[test]
    fn apply_rejects_length_mismatch() {
        let pi = Permutation::identity(3);
        assert_eq!(
            pi.apply(&[1u64, 2]),
            Err(ProtocolError::LengthMismatch {
                expected: 3,
                got: 2
            })
        );
    }

    #[test]
    fn random_permutations_are_bijections() {
        for n in [1usize, 2, 5, 9, 32] {
            let pi = Permutation::random(&mut OsRng, n);
            assert!(Permutation::from_vec(pi.as_slice().to_vec()).is_ok());
        }
    }

    #[test]
    fn invert_undoes_the_mapping() {
        let pi = Permutation::random(&mut OsRng, 9);
        let inv = pi.invert();
        for (j, &i) in pi.as_slice().iter().enumerate() {
            assert_eq!(inv.as_slice()[i], j);
        }
    }

    proptest! {
        #[test]
        fn apply_places_source_values(seed in any::<u64>(), n in 1usize..24) {
            let mut rng = StdRng::seed_from_u64(seed);
            let pi = Permutation::random(&mut rng, n);
            let values: Vec<usize> = (100..100 + n).collect();
            let permuted = pi.apply(&values).unwrap();
            for j in 0..n {
                prop_assert_eq!(permuted[j], values[pi.as_slice()[j]]);
            }
        }

        #[test]
        fn double_inversion_is_identity(seed in any::<u64>(), n in 1usize..24) {
            let mut rng = StdRng::seed_from_u64(seed);
            let pi = Permutation::random(&mut rng, n);
            prop_assert_eq!(pi.invert().invert(), pi);
        }
    }
}
