use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 500;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 800;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
const RNG_SEED: u64 = 0x5EED_2026;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// Input shapes for sorting benchmarks.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Distribution {
    Sorted,
    Reversed,
    RandomUniform,
    NearlySorted1pctSwaps,
}

pub const ALL_DISTRIBUTIONS: [Distribution; 4] = [
    Distribution::Sorted,
    Distribution::Reversed,
    Distribution::RandomUniform,
    Distribution::NearlySorted1pctSwaps,
];

impl Distribution {
    pub fn label(self) -> &'static str {
        match self {
            Self::Sorted => "sorted",
            Self::Reversed => "reversed",
            Self::RandomUniform => "random_uniform",
            Self::NearlySorted1pctSwaps => "nearly_sorted_1pct_swaps",
        }
    }
}

pub fn generate_dataset<R: Rng + ?Sized>(
    rng: &mut R,
    dist: Distribution,
    size: usize,
) -> Vec<i64> {
    match dist {
        Distribution::Sorted => (0..size as i64).collect(),
        Distribution::Reversed => (0..size as i64).rev().collect(),
        Distribution::RandomUniform => (0..size).map(|_| rng.random::<i64>()).collect(),
        Distribution::NearlySorted1pctSwaps => {
            let mut data = (0..size as i64).collect::<Vec<_>>();
            if size == 0 {
                return data;
            }
            let swaps = (size / 100).max(1);
            for _ in 0..swaps {
                let a = rng.random_range(0..size);
                let b = rng.random_range(0..size);
                data.swap(a, b);
            }
            data
        }
    }
}
