use std::hint::black_box;
use std::time::Duration;

use bench::{
    apply_sort_runtime_config, descending_i64, few_uniques_i64, mix_seed, nearly_sorted_i64,
    uniform_i64,
};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pyramid::{Arena, sort_i64_with_arena};

const BENCH_SIZES: [usize; 4] = [4096, 16384, 65536, 262144];

#[derive(Clone, Copy)]
enum Distribution {
    RandomUniform,
    Descending,
    NearlySorted1pctSwaps,
    FewUniques,
}

impl Distribution {
    fn label(self) -> &'static str {
        match self {
            Self::RandomUniform => "random_uniform",
            Self::Descending => "descending",
            Self::NearlySorted1pctSwaps => "nearly_sorted_1pct_swaps",
            Self::FewUniques => "few_uniques",
        }
    }

    fn generate(self, size: usize, seed: u64) -> Vec<i64> {
        match self {
            Self::RandomUniform => uniform_i64(size, seed),
            Self::Descending => descending_i64(size),
            Self::NearlySorted1pctSwaps => nearly_sorted_i64(size, seed),
            Self::FewUniques => few_uniques_i64(size, seed),
        }
    }
}

const DISTRIBUTIONS: [Distribution; 4] = [
    Distribution::RandomUniform,
    Distribution::Descending,
    Distribution::NearlySorted1pctSwaps,
    Distribution::FewUniques,
];

fn bench_pyramid(c: &mut Criterion) {
    for &dist in &DISTRIBUTIONS {
        let mut group = c.benchmark_group(format!("pyramid/{}", dist.label()));

        for &size in &BENCH_SIZES {
            apply_sort_runtime_config(&mut group, size);
            let base = dist.generate(size, seed_for(dist, size, 0xA11C_0001));

            group.bench_function(BenchmarkId::new("pyramid_sort", size), |bencher| {
                bencher.iter_custom(|iters| {
                    let mut total = Duration::ZERO;
                    let mut arena = Arena::for_input_len(size);
                    for _ in 0..iters {
                        let mut data = base.clone();
                        let start = std::time::Instant::now();
                        sort_i64_with_arena(&mut data, &mut arena);
                        total += start.elapsed();
                        black_box(&data);
                    }
                    total
                });
            });

            group.bench_function(BenchmarkId::new("std_unstable", size), |bencher| {
                bencher.iter_custom(|iters| {
                    let mut total = Duration::ZERO;
                    for _ in 0..iters {
                        let mut data = base.clone();
                        let start = std::time::Instant::now();
                        data.sort_unstable();
                        total += start.elapsed();
                        black_box(&data);
                    }
                    total
                });
            });

            group.bench_function(BenchmarkId::new("std_stable", size), |bencher| {
                bencher.iter_custom(|iters| {
                    let mut total = Duration::ZERO;
                    for _ in 0..iters {
                        let mut data = base.clone();
                        let start = std::time::Instant::now();
                        data.sort();
                        total += start.elapsed();
                        black_box(&data);
                    }
                    total
                });
            });
        }

        group.finish();
    }
}

#[inline]
fn seed_for(dist: Distribution, size: usize, salt: u64) -> u64 {
    mix_seed(0x5EED_2026 ^ ((dist as u64) << 48) ^ (size as u64) ^ salt)
}

criterion_group!(benches, bench_pyramid);
criterion_main!(benches);
