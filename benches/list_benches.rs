use adlist::{Direction, Hooks, List};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::hint::black_box;

const SIZES: [usize; 3] = [64, 1_024, 16_384];

fn same_value(value: &u64, key: &u64) -> bool {
    value == key
}

fn filled(len: usize) -> List<u64> {
    let mut list = List::with_hooks(Hooks::new().with_equals(same_value));
    for value in 0..len as u64 {
        list.push_back(value).unwrap();
    }
    list
}

fn push_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("push");
    for len in SIZES {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_function(BenchmarkId::new("push_back", len), |b| {
            b.iter(|| black_box(filled(len)));
        });
        group.bench_function(BenchmarkId::new("push_front_delete_head", len), |b| {
            let mut list = filled(len);
            b.iter(|| {
                let node = list.push_front(black_box(7)).unwrap();
                list.delete_node(node);
            });
        });
    }
    group.finish();
}

fn traversal_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");
    for len in SIZES {
        let list = filled(len);
        let mut rng = StdRng::seed_from_u64(len as u64);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_function(BenchmarkId::new("cursor", len), |b| {
            let mut iter = list.get_iterator(Direction::Forward);
            b.iter(|| {
                list.rewind(&mut iter);
                let mut sum = 0u64;
                while let Some(node) = iter.next(&list) {
                    sum += *list.value(node);
                }
                black_box(sum)
            });
        });
        group.bench_function(BenchmarkId::new("search_key", len), |b| {
            b.iter_with_setup(
                || rng.random_range(0..len as u64),
                |key| black_box(list.search_key(&key)),
            );
        });
        group.bench_function(BenchmarkId::new("index", len), |b| {
            b.iter_with_setup(
                || rng.random_range(-(len as isize)..len as isize),
                |index| black_box(list.index(index)),
            );
        });
    }
    group.finish();
}

fn structure_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("structure");
    for len in SIZES {
        group.bench_function(BenchmarkId::new("rotate", len), |b| {
            let mut list = filled(len);
            b.iter(|| list.rotate());
        });
        group.bench_function(BenchmarkId::new("duplicate", len), |b| {
            let list = filled(len);
            b.iter(|| black_box(list.duplicate().unwrap()));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    push_benchmark,
    traversal_benchmark,
    structure_benchmark
);
criterion_main!(benches);
