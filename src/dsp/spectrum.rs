//! Spectral analyzer
//!
//! DFT magnitude of a sampled signal, scaled by `1 / sample_rate` and
//! rearranged so zero frequency sits in the middle of the array.
//!
//! The `1 / sample_rate` factor approximates the continuous Fourier transform
//! (`X(f) ≈ T·Σ x[n]·e^{-j2πfnT}`), which keeps spectra taken at different
//! sampling frequencies on the same vertical scale.

use rustfft::{num_complex::Complex, FftPlanner};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::signal::Signal;

/// Frequency-centered magnitude spectrum: parallel arrays of frequency and magnitude.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    /// Sample rate of the analyzed signal (Hz)
    pub sample_rate: f64,
    /// Bin frequencies in Hz, ascending, zero at index `len / 2`
    pub frequencies: Vec<f64>,
    /// Normalized magnitude of each bin
    pub magnitudes: Vec<f64>,
}

impl Spectrum {
    pub fn len(&self) -> usize {
        self.magnitudes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.magnitudes.is_empty()
    }

    /// Frequency spacing between bins (Hz)
    pub fn resolution(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.sample_rate / self.len() as f64
        }
    }

    /// Bin with the largest magnitude as `(frequency, magnitude)`.
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.peak_within(f64::NEG_INFINITY, f64::INFINITY)
    }

    /// Largest bin whose frequency lies in `[low, high]`.
    pub fn peak_within(&self, low: f64, high: f64) -> Option<(f64, f64)> {
        self.frequencies
            .iter()
            .zip(&self.magnitudes)
            .filter(|(f, _)| **f >= low && **f <= high)
            .fold(None, |best: Option<(f64, f64)>, (&f, &m)| match best {
                Some((_, bm)) if bm >= m => best,
                _ => Some((f, m)),
            })
    }

    /// Magnitude of the bin nearest `freq`, if one lies within half a bin.
    pub fn magnitude_at(&self, freq: f64) -> Option<f64> {
        nearest_within(&self.frequencies, &self.magnitudes, freq, self.resolution() / 2.0)
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

/// Compute the centered, rate-normalized magnitude spectrum of `signal`.
///
/// Output has the same length as the input. Bin `j` sits at
/// `(j - len/2) * sample_rate / len` Hz.
pub fn analyze(signal: &Signal) -> Spectrum {
    let n = signal.len();
    let sample_rate = signal.sample_rate;
    if n == 0 {
        return Spectrum {
            sample_rate,
            frequencies: Vec::new(),
            magnitudes: Vec::new(),
        };
    }

    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(n);

    let mut buffer: Vec<Complex<f64>> = signal
        .samples
        .iter()
        .map(|&s| Complex::new(s, 0.0))
        .collect();
    fft.process(&mut buffer);

    let scale = 1.0 / sample_rate;
    let raw: Vec<f64> = buffer.iter().map(|c| c.norm() * scale).collect();

    Spectrum {
        sample_rate,
        frequencies: centered_frequencies(n, sample_rate),
        magnitudes: fft_shift(&raw),
    }
}

/// Bin frequencies after centering: `(j - n/2) * rate / n` for `j` in `0..n`.
pub fn centered_frequencies(n: usize, sample_rate: f64) -> Vec<f64> {
    let half = (n / 2) as f64;
    let df = sample_rate / n as f64;
    (0..n).map(|j| (j as f64 - half) * df).collect()
}

/// Rotate an FFT output so the zero-frequency bin lands at index `n / 2`.
pub fn fft_shift<T: Copy>(values: &[T]) -> Vec<T> {
    let n = values.len();
    let half = n / 2;
    (0..n).map(|j| values[(j + n - half) % n]).collect()
}

/// Value paired with the frequency closest to `target`, if within `tolerance`.
pub(crate) fn nearest_within(
    frequencies: &[f64],
    values: &[f64],
    target: f64,
    tolerance: f64,
) -> Option<f64> {
    frequencies
        .iter()
        .zip(values)
        .map(|(&f, &v)| ((f - target).abs(), v))
        .filter(|(dist, _)| *dist <= tolerance)
        .fold(None, |best: Option<(f64, f64)>, cand| match best {
            Some(b) if b.0 <= cand.0 => Some(b),
            _ => Some(cand),
        })
        .map(|(_, v)| v)
}
