use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use orderkit::collection::ordered::{OrderedCollection, OrderedOptions};
use orderkit::traits::CaseInsensitive;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

fn shuffled(n: u64, seed: u64) -> Vec<u64> {
    let mut values: Vec<u64> = (0..n).collect();
    values.shuffle(&mut StdRng::seed_from_u64(seed));
    values
}

/// Fills collections of growing size so both sides of the linear/binary
/// threshold are covered.
fn bench_ordered_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordered_fill");
    for n in [8u64, 10, 12, 64, 1024] {
        let input = shuffled(n, 42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &input, |b, input| {
            b.iter_batched(
                || input.clone(),
                |values| {
                    let mut coll = OrderedCollection::new();
                    for v in values {
                        let _ = std::hint::black_box(coll.insert(v));
                    }
                    coll
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

/// Same input, different thresholds: how far the linear scan stays
/// competitive.
fn bench_ordered_threshold(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordered_threshold");
    let input = shuffled(256, 7);
    for threshold in [0usize, 10, 32, 256] {
        let options = OrderedOptions::default().with_linear_search_threshold(threshold);
        group.bench_with_input(
            BenchmarkId::from_parameter(threshold),
            &input,
            |b, input| {
                b.iter_batched(
                    || input.clone(),
                    |values| {
                        let mut coll = OrderedCollection::with_options(options);
                        for v in values {
                            let _ = std::hint::black_box(coll.insert(v));
                        }
                        coll
                    },
                    BatchSize::SmallInput,
                )
            },
        );
    }
    group.finish();
}

fn bench_ordered_duplicate_rejection(c: &mut Criterion) {
    c.bench_function("ordered_duplicate_rejection", |b| {
        b.iter_batched(
            || {
                let mut coll = OrderedCollection::new();
                coll.try_extend(0..4096u64).unwrap();
                coll
            },
            |mut coll| {
                for i in 0..4096u64 {
                    let _ = std::hint::black_box(coll.insert(std::hint::black_box(i)));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_ordered_case_insensitive(c: &mut Criterion) {
    let words: Vec<String> = shuffled(512, 3)
        .into_iter()
        .map(|n| format!("Word{:04}", n))
        .collect();
    c.bench_function("ordered_case_insensitive", |b| {
        b.iter_batched(
            || words.clone(),
            |words| {
                let mut coll =
                    OrderedCollection::with_comparer(CaseInsensitive, OrderedOptions::default());
                for w in words {
                    let _ = std::hint::black_box(coll.insert(w));
                }
                coll
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_ordered_fill,
    bench_ordered_threshold,
    bench_ordered_duplicate_rejection,
    bench_ordered_case_insensitive
);
criterion_main!(benches);
