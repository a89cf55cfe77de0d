//! Benchmarks for narrowband signal synthesis.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use shannon_demo::synth::NarrowbandSignal;

use crate::RATES_HZ;

pub fn bench_synth(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/synth");
    let signal = NarrowbandSignal::default();

    for &hz in RATES_HZ {
        group.bench_with_input(BenchmarkId::new("sample", hz), &hz, |b, &hz| {
            b.iter(|| signal.sample(black_box(hz as f64)))
        });
    }

    group.finish();
}
