use ballotmixlib::{Pedersen, Prover, Verifier, ZpGroup};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::OsRng;

const BALLOTS: [u64; 5] = [5, 15, 25, 35, 45];

fn commit_batch_benchmark(c: &mut Criterion) {
    c.bench_function("commit_batch", |b| {
        b.iter(|| {
            let ped = Pedersen::new(ZpGroup::toy_parameters());
            black_box(Prover::commit_messages(ped, &BALLOTS, &mut OsRng).unwrap());
        });
    });
}

fn shuffle_and_prove_benchmark(c: &mut Criterion) {
    let ped = Pedersen::new(ZpGroup::toy_parameters());
    let (prover, _) = Prover::commit_messages(ped, &BALLOTS, &mut OsRng).unwrap();

    c.bench_function("shuffle_and_prove", |b| {
        b.iter(|| {
            black_box(prover.shuffle_and_prove(&mut OsRng).unwrap());
        });
    });
}

fn subset_check_benchmark(c: &mut Criterion) {
    let ped = Pedersen::new(ZpGroup::toy_parameters());
    let (prover, _) = Prover::commit_messages(ped.clone(), &BALLOTS, &mut OsRng).unwrap();
    let verifier = Verifier::new(ped);
    let record = prover.shuffle_and_prove(&mut OsRng).unwrap();
    let subset: Vec<usize> = (0..BALLOTS.len()).collect();

    c.bench_function("subset_check", |b| {
        b.iter(|| {
            black_box(verifier.check_record(&record, &subset).unwrap());
        });
    });
}

criterion_group!(
    benches,
    commit_batch_benchmark,
    shuffle_and_prove_benchmark,
    subset_check_benchmark
);
criterion_main!(benches);
