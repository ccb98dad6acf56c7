use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::SamplingMode;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SORT_SAMPLE_SIZE: usize = 10;
const SORT_WARM_UP_MS: u64 = 80;
const SORT_MEASURE_MS_SMALL: u64 = 120;
const SORT_MEASURE_MS_LARGE: u64 = 300;
const SORT_MEASURE_MS_XL: u64 = 500;

pub fn apply_sort_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, size: usize) {
    group.sample_size(SORT_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SORT_WARM_UP_MS));
    if size <= 16384 {
        group.sampling_mode(SamplingMode::Auto);
        group.measurement_time(Duration::from_millis(SORT_MEASURE_MS_SMALL));
    } else if size <= 65536 {
        group.sampling_mode(SamplingMode::Flat);
        group.measurement_time(Duration::from_millis(SORT_MEASURE_MS_LARGE));
    } else {
        group.sampling_mode(SamplingMode::Flat);
        group.measurement_time(Duration::from_millis(SORT_MEASURE_MS_XL));
    }
}

#[inline]
pub fn mix_seed(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

pub fn uniform_i64(size: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(size);
    for _ in 0..size {
        data.push(rng.random::<i64>());
    }
    data
}

pub fn descending_i64(size: usize) -> Vec<i64> {
    (0..size as i64).rev().collect()
}

pub fn nearly_sorted_i64(size: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data: Vec<i64> = (0..size as i64).collect();
    if size > 1 {
        let swaps = (size / 100).max(1);
        for _ in 0..swaps {
            let a = rng.random_range(0..size);
            let b = rng.random_range(0..size);
            data.swap(a, b);
        }
    }
    data
}

pub fn few_uniques_i64(size: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(size);
    for _ in 0..size {
        data.push(rng.random_range(0..16_i64) * 17);
    }
    data
}
