//! Benchmarks for the numeric core and full pipeline runs.
//!
//! Run with: cargo bench
//!
//! The pipeline re-runs from scratch on every key press, so a full run has to
//! stay well under one UI frame (~16ms) at every sampling frequency.
//!
//! Benchmark groups:
//!   - dsp/*        Synthesis, spectral analysis and replica tiling
//!   - scenarios/*  Complete pipeline runs at representative rates

use criterion::{criterion_group, criterion_main};

mod dsp;
mod scenarios;

/// Sampling frequencies covering both slider bounds and the alias regimes.
pub const RATES_HZ: &[u32] = &[300, 440, 500, 650, 2000, 4000];

criterion_group!(
    benches,
    dsp::bench_synth,
    dsp::bench_spectrum,
    dsp::bench_replica,
    scenarios::bench_pipeline,
);
criterion_main!(benches);
