use core::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tigerhash::{Convention, Tiger};

const SIZES: [usize; 5] = [0, 64, 1024, 16 * 1024, 1024 * 1024];

fn oneshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("tiger/oneshot");
    for &len in SIZES.iter() {
        let data = vec![0xA5u8; len];
        group.throughput(Throughput::Bytes(len as u64));
        for &convention in Convention::ALL.iter() {
            let tiger = Tiger::new(convention);
            group.bench_with_input(BenchmarkId::new(convention.name(), len), &data, |b, d| {
                b.iter(|| black_box(tiger.digest(black_box(d))))
            });
        }
    }
    group.finish();
}

fn hex_output(c: &mut Criterion) {
    let data = vec![0x5Au8; 1024];
    c.bench_function("tiger/hash_hex_1k", |b| {
        b.iter(|| black_box(tigerhash::hash(black_box(&data))))
    });
}

criterion_group!(benches, oneshot, hex_output);
criterion_main!(benches);
