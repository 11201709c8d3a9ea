use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rle_bool_vec::RleBoolVec;

// returns k run lengths that sum to n
fn build_runs(rng: &mut StdRng, k: usize, n: usize) -> Vec<usize> {
    // Sample k - 1 numbers in [0..n-2]
    let mut samples = rand::seq::index::sample(rng, n - 1, k - 1).into_vec();
    // Shift them by 1, sort, then prepend 0 and append n, which gives us
    // k+1 numbers from 0 to n, from which we then compute deltas
    for sample in samples.iter_mut() {
        *sample += 1;
    }
    samples.sort();
    samples.insert(0, 0);
    samples.push(n);

    let deltas: Vec<usize> = samples.windows(2).map(|w| w[1] - w[0]).collect();
    assert!(deltas.iter().sum::<usize>() == n);
    deltas
}

// Alternating runs of zeros and ones with the given lengths.
fn build_vec(runs: &[usize]) -> RleBoolVec {
    let mut v = RleBoolVec::new();
    for (i, &len) in runs.iter().enumerate() {
        v.resize(v.len() + len, i % 2 == 1);
    }
    v
}

fn bench_rle_bool_vec(c: &mut Criterion) {
    let num_runs = vec![
        1_000,   //
        10_000,  //
        100_000, //
    ]; // k
    let len = 10_000_000usize; // n

    let mut rng = StdRng::seed_from_u64(42);

    let mut group = c.benchmark_group("RleBoolVec");
    for k in num_runs {
        let runs = build_runs(&mut rng, k, len);
        let bv = build_vec(&runs);
        assert_eq!(bv.num_runs(), k);

        group.bench_function(BenchmarkId::new("At", k), |b| {
            b.iter(|| bv.at(rng.gen_range(0..len)).unwrap())
        });
        group.bench_function(BenchmarkId::new("Set", k), |b| {
            let mut v = bv.clone();
            b.iter(|| v.set(rng.gen_range(0..len), rng.gen()).unwrap())
        });
        group.bench_function(BenchmarkId::new("InsertMiddle", k), |b| {
            let mut v = bv.clone();
            b.iter(|| {
                let pos = rng.gen_range(len / 2..len);
                v.insert(pos, true).unwrap();
                v.pop_back().unwrap();
            })
        });
        group.bench_function(BenchmarkId::new("Iterate", k), |b| {
            b.iter(|| bv.iter().filter(|&x| x).count())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rle_bool_vec);
criterion_main!(benches);
