//! Benchmarks for spectral analysis.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use shannon_demo::{dsp::analyze, synth::NarrowbandSignal};

use crate::RATES_HZ;

pub fn bench_spectrum(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/spectrum");
    let signal = NarrowbandSignal::default();

    for &hz in RATES_HZ {
        // Lengths like 130 or 60 exercise rustfft's mixed-radix paths
        let sampled = signal.sample(hz as f64);
        group.bench_with_input(BenchmarkId::new("analyze", hz), &sampled, |b, sampled| {
            b.iter(|| analyze(black_box(sampled)))
        });
    }

    group.finish();
}
