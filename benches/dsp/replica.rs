//! Benchmarks for replica tiling.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use shannon_demo::{
    dsp::{analyze, ReplicaSpectrum},
    synth::NarrowbandSignal,
};

use crate::RATES_HZ;

pub fn bench_replica(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/replica");
    let signal = NarrowbandSignal::default();

    for &hz in RATES_HZ {
        let spectrum = analyze(&signal.sample(hz as f64));
        group.bench_with_input(BenchmarkId::new("build", hz), &spectrum, |b, spectrum| {
            b.iter(|| ReplicaSpectrum::build(black_box(spectrum), hz as f64))
        });
    }

    group.finish();
}
