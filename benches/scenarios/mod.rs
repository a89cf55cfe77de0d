//! End-to-end pipeline benchmarks.

mod pipeline;

pub use pipeline::bench_pipeline;
