//! Subset consistency check between an original and a shuffled
//! commitment set.

use tracing::debug;

use crate::errors::ProtocolError;
use crate::group::CyclicGroup;
use crate::pedersen::Pedersen;
use crate::shuffle::permutation::Permutation;

/// Checks that a claimed shuffle reproduces a subset of the original
/// commitments.
///
/// For the chosen subset `I` of original indices, verifies
///
/// ```text
/// prod_{i in I} inputs[i]  ==  h^R * prod_{i in I} outputs[inv_perm[i]]
/// ```
///
/// with `R = sum_{i in I} (input_openings[i] - output_openings[inv_perm[i]])`
/// mod the group order. The relation holds for an honest shuffle because
/// input and output commit to the same message, so the `g` term divides out
/// and only the opening difference remains in `h`.
///
/// The permutation and both opening sets are disclosed inputs, so this
/// proves algebraic self-consistency of the transcript, nothing more. It is
/// not a zero-knowledge shuffle argument and does not hide who moved where.
///
/// Tampering with any commitment, message, or reported opening in the
/// subset yields `Ok(false)`. Only malformed inputs produce an error.
pub fn subset_check<G: CyclicGroup>(
    ped: &Pedersen<G>,
    inputs: &[G::Element],
    input_openings: &[G::Exponent],
    outputs: &[G::Element],
    output_openings: &[G::Exponent],
    pi: &Permutation,
    subset: &[usize],
) -> Result<bool, ProtocolError> {
    if subset.is_empty() {
        return Err(ProtocolError::EmptySubset);
    }
    let n = pi.len();
    for len in [
        inputs.len(),
        input_openings.len(),
        outputs.len(),
        output_openings.len(),
    ] {
        if len != n {
            return Err(ProtocolError::LengthMismatch {
                expected: n,
                got: len,
            });
        }
    }
    for &index in subset {
        if index >= n {
            return Err(ProtocolError::IndexOutOfRange { index, len: n });
        }
    }

    let inv = pi.invert();
    let group = ped.group();

    let mut lhs = group.identity();
    let mut rhs = group.identity();
    let mut delta = group.zero_exponent();
    for &i in subset {
        let j = inv.as_slice()[i];
        lhs = group.mul(&lhs, &inputs[i]);
        rhs = group.mul(&rhs, &outputs[j]);
        // input minus output randomness, not the other way around
        delta = group.add_exponents(
            &delta,
            &group.sub_exponents(&input_openings[i], &output_openings[j]),
        );
    }
    let rhs = group.mul(&rhs, &group.exp_h(&delta));

    let accepted = lhs == rhs;
    debug!(
        subset_len = subset.len(),
        accepted, "subset consistency check evaluated"
    );
    Ok(accepted)
}

// ------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------
