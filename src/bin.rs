use anyhow::Result;
use ballotmixlib::{Pedersen, Prover, Verifier, ZpGroup};
use rand::rngs::OsRng;
use tracing_subscriber::EnvFilter;

pub fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let pedersen = Pedersen::new(ZpGroup::toy_parameters());
    let ballots: [u64; 5] = [5, 15, 25, 35, 45];
    println!("committing ballot batch {:?}", ballots);

    let (prover, inputs) = Prover::commit_messages(pedersen.clone(), &ballots, &mut OsRng)?;
    println!("input commitments:");
    for (i, commitment) in inputs.iter().enumerate() {
        println!("  [{}] {}", i, commitment);
    }

    let record = prover.shuffle_and_prove(&mut OsRng)?;
    println!(
        "shuffled with permutation {:?}",
        record.permutation().as_slice()
    );

    let verifier = Verifier::new(pedersen);
    let full: Vec<usize> = (0..ballots.len()).collect();
    let accepted = verifier.check_record(&record, &full)?;
    println!(
        "full subset check: {}",
        if accepted { "accept" } else { "reject" }
    );

    let spot = [0usize, 2, 4];
    let accepted = verifier.check_record(&record, &spot)?;
    println!(
        "spot check {:?}: {}",
        spot,
        if accepted { "accept" } else { "reject" }
    );

    // the disclosed transcript, as a verifier would receive it
    println!("{}", serde_json::to_string_pretty(&record)?);

    Ok(())
}
