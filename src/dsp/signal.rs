//! Sampled signal container.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A real signal sampled on a uniform grid: parallel arrays of time and amplitude.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    /// Sample rate in Hz
    pub sample_rate: f64,
    /// Sample times in seconds, ascending
    pub times: Vec<f64>,
    /// Amplitude at each time
    pub samples: Vec<f64>,
}

impl Signal {
    pub fn new(sample_rate: f64, times: Vec<f64>, samples: Vec<f64>) -> Self {
        debug_assert_eq!(times.len(), samples.len());
        Self {
            sample_rate,
            times,
            samples,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Largest absolute amplitude (0 for an empty signal).
    pub fn peak(&self) -> f64 {
        self.samples.iter().fold(0.0f64, |acc, &x| acc.max(x.abs()))
    }

    /// Amplitude at exactly `t`, if `t` is one of the grid points.
    pub fn sample_at(&self, t: f64) -> Option<f64> {
        self.times
            .iter()
            .position(|&ti| ti == t)
            .map(|i| self.samples[i])
    }

    /// `(time, amplitude)` pairs, the shape chart widgets consume.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.times
            .iter()
            .copied()
            .zip(self.samples.iter().copied())
            .collect()
    }

    /// Every sample is finite (no NaN or infinity).
    pub fn is_finite(&self) -> bool {
        self.samples.iter().all(|s| s.is_finite())
    }
}
