use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use orderkit::collection::mru::{MruCollection, MruTriggers};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn bench_mru_eviction_churn(c: &mut Criterion) {
    c.bench_function("mru_eviction_churn", |b| {
        b.iter_batched(
            || MruCollection::builder(256).initial_data(0..256u64).build(),
            |mut coll| {
                for i in 0..1024u64 {
                    let _ = std::hint::black_box(coll.insert(std::hint::black_box(10_000 + i)));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_mru_reinsert_hotset(c: &mut Criterion) {
    c.bench_function("mru_reinsert_hotset", |b| {
        b.iter_batched(
            || MruCollection::builder(256).initial_data(0..256u64).build(),
            |mut coll| {
                for i in 0..1024u64 {
                    let _ = std::hint::black_box(coll.insert(std::hint::black_box(i % 32)));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_mru_get_on_access(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(11);
    let reads: Vec<usize> = (0..1024).map(|_| rng.gen_range(0..256)).collect();

    c.bench_function("mru_get_on_access", |b| {
        b.iter_batched(
            || {
                MruCollection::builder(256)
                    .triggers(MruTriggers::all())
                    .initial_data(0..256u64)
                    .build()
            },
            |mut coll| {
                for &i in &reads {
                    let _ = std::hint::black_box(coll.get(std::hint::black_box(i)));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_mru_peek(c: &mut Criterion) {
    let coll = MruCollection::builder(256).initial_data(0..256u64).build();
    c.bench_function("mru_peek", |b| {
        b.iter(|| {
            for i in 0..256usize {
                let _ = std::hint::black_box(coll.peek(std::hint::black_box(i)));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_mru_eviction_churn,
    bench_mru_reinsert_hotset,
    bench_mru_get_on_access,
    bench_mru_peek
);
criterion_main!(benches);
