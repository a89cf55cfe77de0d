//! Spectral replicas of a sampled signal.
//!
//! Sampling at `Fs` makes the spectrum periodic with period `Fs`. Tiling the
//! baseband spectrum at `k·Fs` shows where those images land relative to the
//! original band; aliasing is exactly the images overlapping each other.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::spectrum::{nearest_within, Spectrum};

/// Replica offsets `k` used for the overlay: `-7..=6`, 14 copies.
pub const REPLICA_OFFSETS: std::ops::Range<i32> = -7..7;

/// Concatenation of shifted copies of a sampled spectrum.
///
/// Points are stored copy after copy, in `REPLICA_OFFSETS` order; since each
/// copy spans exactly one period, the result is also ascending in frequency.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ReplicaSpectrum {
    /// Sampling frequency used as the tiling period (Hz)
    pub sampling_rate: f64,
    /// Shifted frequencies (Hz)
    pub frequencies: Vec<f64>,
    /// Magnitudes, repeated for each copy
    pub magnitudes: Vec<f64>,
    /// Number of copies concatenated
    pub copies: usize,
    /// Bin spacing of the underlying spectrum (Hz)
    resolution: f64,
}

impl ReplicaSpectrum {
    /// Tile `sampled` at every offset in [`REPLICA_OFFSETS`].
    pub fn build(sampled: &Spectrum, sampling_rate: f64) -> Self {
        Self::build_with_offsets(sampled, sampling_rate, REPLICA_OFFSETS)
    }

    /// Tile `sampled` at `k * sampling_rate` for each `k` in `offsets`.
    pub fn build_with_offsets(
        sampled: &Spectrum,
        sampling_rate: f64,
        offsets: impl IntoIterator<Item = i32>,
    ) -> Self {
        let mut frequencies = Vec::new();
        let mut magnitudes = Vec::new();
        let mut copies = 0;

        for k in offsets {
            let shift = k as f64 * sampling_rate;
            frequencies.extend(sampled.frequencies.iter().map(|f| f + shift));
            magnitudes.extend_from_slice(&sampled.magnitudes);
            copies += 1;
        }

        Self {
            sampling_rate,
            frequencies,
            magnitudes,
            copies,
            resolution: sampled.resolution(),
        }
    }

    pub fn len(&self) -> usize {
        self.magnitudes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.magnitudes.is_empty()
    }

    /// Magnitude of the replica point nearest `freq`, within half a bin.
    pub fn magnitude_at(&self, freq: f64) -> Option<f64> {
        nearest_within(&self.frequencies, &self.magnitudes, freq, self.resolution / 2.0)
    }

    /// Lowest and highest frequency covered by the tiling.
    pub fn span(&self) -> Option<(f64, f64)> {
        let first = *self.frequencies.first()?;
        let last = *self.frequencies.last()?;
        Some((first, last))
    }

    /// `(frequency, magnitude)` pairs for plotting.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.frequencies
            .iter()
            .copied()
            .zip(self.magnitudes.iter().copied())
            .collect()
    }
}
