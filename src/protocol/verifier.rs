//! Verifier side of one protocol run.

use crate::errors::ProtocolError;
use crate::group::CyclicGroup;
use crate::pedersen::Pedersen;
use crate::shuffle::{subset_check, Permutation, ShuffleRecord};

/// Spot-checks a disclosed shuffle transcript.
///
/// Holds group parameters only. A rejected check is a final, reported
/// outcome; there is no retry state.
#[derive(Debug, Clone)]
pub struct Verifier<G: CyclicGroup> {
    ped: Pedersen<G>,
}

impl<G: CyclicGroup> Verifier<G> {
    /// Builds a verifier over the shared commitment scheme.
    pub fn new(ped: Pedersen<G>) -> Verifier<G> {
        Verifier { ped }
    }

    /// Runs the subset consistency check on the disclosed transcript parts.
    ///
    /// Delegates to [`subset_check`]; `Ok(false)` means the transcript is
    /// inconsistent for the chosen subset, an `Err` means the inputs were
    /// malformed.
    pub fn check(
        &self,
        subset: &[usize],
        inputs: &[G::Element],
        input_openings: &[G::Exponent],
        outputs: &[G::Element],
        output_openings: &[G::Exponent],
        pi: &Permutation,
    ) -> Result<bool, ProtocolError> {
        subset_check(
            &self.ped,
            inputs,
            input_openings,
            outputs,
            output_openings,
            pi,
            subset,
        )
    }

    /// Convenience wrapper running [`Verifier::check`] against a borrowed
    /// [`ShuffleRecord`].
    pub fn check_record(
        &self,
        record: &ShuffleRecord<G>,
        subset: &[usize],
    ) -> Result<bool, ProtocolError> {
        self.check(
            subset,
            record.inputs(),
            record.input_openings(),
            record.outputs(),
            record.output_openings(),
            record.permutation(),
        )
    }
}

// ------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::protocol::Prover;
    use crate::zp::ZpGroup;
    use num_bigint::BigUint;
    use rand::rngs::OsRng;
    use rand::seq::index::sample;
    use rand::Rng;

    const BALLOTS: [u64; 5] = [5, 15, 25, 35, 45];

    fn protocol_run() -> (
        Prover<ZpGroup>,
        Verifier<ZpGroup>,
        ShuffleRecord<ZpGroup>,
    ) {
        let ped = Pedersen::new(ZpGroup::toy_parameters());
        let (prover, _) = Prover::commit_messages(ped.clone(), &BALLOTS, &mut OsRng).unwrap();
        let verifier = Verifier::new(ped);
        let record = prover.shuffle_and_prove(&mut OsRng).unwrap();
        (prover, verifier, record)
    }

    #[test]
    fn full_subset_always_passes() {
        let (_, verifier, record) = protocol_run();
        let subset: Vec<usize> = (0..BALLOTS.len()).collect();
        assert_eq!(verifier.check_record(&record, &subset), Ok(true));
    }

    #[test]
    fn random_subsets_pass() {
        let (_, verifier, record) = protocol_run();
        let n = BALLOTS.len();
        for _ in 0..5 {
            let k = OsRng.gen_range(1..=n);
            let subset: Vec<usize> = sample(&mut OsRng, n, k).into_vec();
            assert_eq!(verifier.check_record(&record, &subset), Ok(true));
        }
    }

    #[test]
    fn chosen_subset_passes() {
        let (_, verifier, record) = protocol_run();
        assert_eq!(verifier.check_record(&record, &[0, 2, 4]), Ok(true));
    }

    #[test]
    fn repeated_runs_are_independent() {
        let (prover, verifier, _) = protocol_run();
        // a second run draws its own permutation and rerandomizers
        let record = prover.shuffle_and_prove(&mut OsRng).unwrap();
        let subset: Vec<usize> = (0..BALLOTS.len()).collect();
        assert_eq!(verifier.check_record(&record, &subset), Ok(true));
    }

    #[test]
    fn cheating_shuffle_fails() {
        let (_, verifier, record) = protocol_run();
        // corrupt the output that original index 0 landed on
        let j = record.permutation().invert().as_slice()[0];
        let mut bad_outputs = record.outputs().to_vec();
        bad_outputs[j] = verifier
            .ped
            .group()
            .mul(&bad_outputs[j], &BigUint::from(5u32));

        let verdict = verifier.check(
            &[0, 1],
            record.inputs(),
            record.input_openings(),
            &bad_outputs,
            record.output_openings(),
            record.permutation(),
        );
        assert_eq!(verdict, Ok(false));
    }

    #[test]
    fn explicit_openings_reconstruct_the_batch() {
        let ped = Pedersen::new(ZpGroup::toy_parameters());
        let messages: Vec<_> = BALLOTS
            .iter()
            .map(|&w| ped.group().exponent_from_u64(w))
            .collect();
        let openings: Vec<_> = messages
            .iter()
            .map(|w| ped.commit(w, &mut OsRng).1)
            .collect();
        let prover = Prover::new(ped.clone(), messages.clone(), openings.clone()).unwrap();

        // the recomputed inputs open under the supplied openings
        for ((c, w), r) in prover
            .inputs()
            .iter()
            .zip(messages.iter())
            .zip(openings.iter())
        {
            assert!(ped.verify(c, w, r));
        }
    }

    #[test]
    fn empty_batch_is_rejected() {
        let ped = Pedersen::new(ZpGroup::toy_parameters());
        assert!(matches!(
            Prover::commit_messages(ped, &[], &mut OsRng),
            Err(ProtocolError::EmptyBatch)
        ));
    }
}
