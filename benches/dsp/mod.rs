//! Benchmarks for the numeric building blocks.

mod replica;
mod spectrum;
mod synth;

pub use replica::bench_replica;
pub use spectrum::bench_spectrum;
pub use synth::bench_synth;
