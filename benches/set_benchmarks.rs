use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use keyset::Set;

const SET_SIZE: usize = 1000;

// Spread the inputs over the whole u64 range with a fixed multiplier, so runs are comparable.
fn scattered(n: usize, offset: u64) -> Vec<u64> {
    (offset..offset + n as u64)
        .map(|i| i.wrapping_mul(0x9E37_79B9_7F4A_7C15))
        .collect()
}

fn benchmark_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("Insertion");
    let items = scattered(SET_SIZE, 0);

    group.bench_function("insert", |b| {
        b.iter(|| {
            let mut set = Set::<u64>::new();
            for item in &items {
                set.insert(black_box(*item));
            }
            set
        });
    });

    group.bench_function("insert_all", |b| {
        b.iter(|| {
            let mut set = Set::<u64>::new();
            set.insert_all(black_box(&items).iter().copied());
            set
        });
    });

    group.finish();
}

fn benchmark_algebra(c: &mut Criterion) {
    let mut group = c.benchmark_group("Algebra");

    for size in [10, 100, SET_SIZE].iter() {
        let left = Set::<u64>::from_seq(scattered(*size, 0));
        // Half of right overlaps with left.
        let right = Set::<u64>::from_seq(scattered(*size, (*size / 2) as u64));

        group.bench_with_input(BenchmarkId::new("union", size), size, |b, _| {
            b.iter(|| black_box(&left).union(black_box(&right)));
        });

        group.bench_with_input(BenchmarkId::new("intersection", size), size, |b, _| {
            b.iter(|| black_box(&left).intersection(black_box(&right)));
        });

        group.bench_with_input(BenchmarkId::new("difference", size), size, |b, _| {
            b.iter(|| black_box(&left).difference(black_box(&right)));
        });

        group.bench_with_input(BenchmarkId::new("is_subset", size), size, |b, _| {
            b.iter(|| black_box(&left).is_subset(black_box(&right)));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_insertion, benchmark_algebra);
criterion_main!(benches);
