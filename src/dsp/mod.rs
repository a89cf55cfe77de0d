//! Numeric building blocks for the sampling demo.
//!
//! Everything here is a pure function of its inputs: grids, signals and
//! spectra are rebuilt from scratch on every run and never mutated afterwards.

/// Spectral replicas tiled at multiples of the sampling frequency.
pub mod replica;
/// Sampled signal container.
pub mod signal;
/// Normalized sinc.
pub mod sinc;
/// Rate-normalized, frequency-centered magnitude spectra.
pub mod spectrum;
/// Half-open uniform time grids.
pub mod time_grid;

pub use replica::ReplicaSpectrum;
pub use signal::Signal;
pub use spectrum::{analyze, Spectrum};
pub use time_grid::TimeGrid;
