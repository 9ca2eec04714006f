use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use editdistance::{
    damerau_levenshtein_distance, damerau_levenshtein_distance_with, levenshtein_distance,
    DamerauBoundary,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn random_string(rng: &mut ChaCha8Rng, len: usize) -> String {
    (0..len)
        .map(|_| char::from(rng.gen_range(b'a'..=b'z')))
        .collect()
}

fn bench_edit_distance(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut group = c.benchmark_group("edit_distance");

    for &len in &[8usize, 64, 256] {
        let a = random_string(&mut rng, len);
        let b = random_string(&mut rng, len);

        group.bench_with_input(BenchmarkId::new("levenshtein", len), &len, |bench, _| {
            bench.iter(|| levenshtein_distance(black_box(a.as_str()), black_box(b.as_str())))
        });
        group.bench_with_input(
            BenchmarkId::new("damerau_levenshtein", len),
            &len,
            |bench, _| {
                bench.iter(|| {
                    damerau_levenshtein_distance(black_box(a.as_str()), black_box(b.as_str()))
                })
            },
        );
        group.bench_with_input(
            BenchmarkId::new("damerau_levenshtein_ramp", len),
            &len,
            |bench, _| {
                bench.iter(|| {
                    damerau_levenshtein_distance_with(
                        black_box(a.as_str()),
                        black_box(b.as_str()),
                        DamerauBoundary::Ramp,
                    )
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_edit_distance);
criterion_main!(benches);
