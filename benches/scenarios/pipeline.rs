//! One full run per sampling frequency, as triggered by a key press.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use shannon_demo::{SamplingDemo, SamplingRate};

use crate::RATES_HZ;

pub fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/pipeline");
    let demo = SamplingDemo::default();

    for &hz in RATES_HZ {
        let Ok(rate) = SamplingRate::new(hz) else {
            continue;
        };
        group.bench_with_input(BenchmarkId::new("run", hz), &rate, |b, &rate| {
            b.iter(|| demo.run(black_box(rate)))
        });
    }

    group.finish();
}
