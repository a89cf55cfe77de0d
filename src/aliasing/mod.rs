//! Aliasing theory for narrowband signals.
//!
//! Sampling a real signal occupying `[F0 - B/2, F0 + B/2]` (and its mirror on
//! the negative axis) folds both bands into `[-Fs/2, Fs/2)`. Aliasing happens
//! exactly when the folded positive band overlaps the folded negative band.
//! Solving for `Fs` gives the excluded sampling frequencies
//!
//! ```text
//! Fs < 2B    or    (2F0 - B)/k < Fs < (2F0 + B)/k    for k = 1, 2, ...
//! ```
//!
//! For odd `k` the overlap straddles the Nyquist frequency, for even `k` it
//! straddles zero.

mod interval;

pub use interval::{merge, FrequencyInterval};

use interval::EDGE_TOLERANCE;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::synth::NarrowbandSignal;

/// Excluded intervals as printed in the commentary for F0 = 1000 Hz, B = 200 Hz.
pub const STATIC_EXCLUDED_INTERVALS: [(i64, i64); 5] =
    [(0, 440), (450, 550), (600, 733), (900, 1100), (1800, 2200)];

/// Explanatory paragraphs shown alongside the plots.
pub const COMMENTARY: &[&str] = &[
    "Sampling a narrowband signal with Fs lower than twice its maximum frequency \
     does not always lead to aliasing.",
    "The signal has central frequency F0 = 1000 Hz and bandwidth B = 200 Hz. \
     Aliasing occurs when Fs lies in:",
    "    [0,440] ∪ [450,550] ∪ [600,733] ∪ [900,1100] ∪ [1800,2200]",
    "To avoid aliasing the sampling frequency must at least satisfy Fs >= 2B. \
     Not every such frequency works: positive and negative spectral images may \
     still overlap, which excludes Fs in [(2F0-B)/k, (2F0+B)/k] for every non-zero \
     integer k.",
    "For odd k such a Fs puts the Nyquist frequency inside a spectral image; for \
     even k it puts zero frequency inside one. Either way the images overlap.",
    "Here that excludes [0,400] ∪ [333,440] ∪ [450,550] ∪ [600,733] ∪ [900,1100] \
     ∪ [1800,2200], so the smallest usable sampling frequency is 440 Hz.",
    "Below 2(F0 + B/2) the sampled signal in [0, Fs/2] sounds different from the \
     original, yet without aliasing the original can still be recovered by \
     digital upsampling and band-pass filtering.",
    "Spectral magnitudes are scaled by 1/Fs so every sampling frequency shares \
     the same vertical scale.",
];

/// Where overlapping images meet in the folded spectrum.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliasKind {
    /// Overlap straddles 0 Hz (even order `k`)
    ZeroFrequency,
    /// Overlap straddles ±Fs/2 (odd order `k`)
    Nyquist,
}

/// Excluded sampling frequencies for `signal`, sorted and merged.
pub fn excluded_intervals(signal: &NarrowbandSignal) -> Vec<FrequencyInterval> {
    let f0 = signal.center_hz;
    let b = signal.bandwidth_hz;

    // Beyond this order every interval sits inside [0, 2B]
    let max_order = ((2.0 * f0 + b) / (2.0 * b)).ceil() as u32 + 1;

    let mut intervals = vec![FrequencyInterval::new(0.0, 2.0 * b)];
    intervals.extend((1..=max_order).map(|k| order_interval(signal, k)));
    merge(intervals)
}

/// `[(2F0 - B)/k, (2F0 + B)/k]`
pub fn order_interval(signal: &NarrowbandSignal, k: u32) -> FrequencyInterval {
    let k = k as f64;
    FrequencyInterval::new(
        (2.0 * signal.center_hz - signal.bandwidth_hz) / k,
        (2.0 * signal.center_hz + signal.bandwidth_hz) / k,
    )
}

/// Order `k` of the excluded interval strictly containing `fs`, if any.
pub fn exclusion_order(signal: &NarrowbandSignal, fs: f64) -> Option<u32> {
    if fs <= 0.0 {
        return None;
    }
    // (2F0 + B)/k > fs  =>  k < (2F0 + B)/fs
    let max_order = ((2.0 * signal.center_hz + signal.bandwidth_hz) / fs).ceil() as u32;
    (1..=max_order).find(|&k| order_interval(signal, k).contains_strictly(fs))
}

/// `true` when `fs` lies in no excluded interval (edges are acceptable).
pub fn is_alias_free(signal: &NarrowbandSignal, fs: f64) -> bool {
    !excluded_intervals(signal)
        .iter()
        .any(|interval| interval.contains_strictly(fs))
}

/// Smallest alias-free sampling frequency in `[min_hz, max_hz]`.
pub fn minimum_alias_free_rate(signal: &NarrowbandSignal, min_hz: f64, max_hz: f64) -> Option<f64> {
    let excluded = excluded_intervals(signal);
    std::iter::once(min_hz)
        .chain(excluded.iter().map(|interval| interval.high))
        .filter(|&fs| fs >= min_hz && fs <= max_hz)
        .filter(|&fs| !excluded.iter().any(|i| i.contains_strictly(fs)))
        .min_by(|a, b| a.total_cmp(b))
}

/// Fold `freq` into the baseband `[-fs/2, fs/2)`.
#[inline]
pub fn fold(freq: f64, fs: f64) -> f64 {
    freq - fs * (freq / fs + 0.5).floor()
}

/// Fold an interval into the baseband, splitting it where it wraps past `fs/2`.
pub fn fold_interval(interval: &FrequencyInterval, fs: f64) -> Vec<FrequencyInterval> {
    let nyquist = fs / 2.0;
    if interval.width() >= fs {
        return vec![FrequencyInterval::new(-nyquist, nyquist)];
    }

    let low = fold(interval.low, fs);
    let high = low + interval.width();
    if high <= nyquist + EDGE_TOLERANCE {
        vec![FrequencyInterval::new(low, high.min(nyquist))]
    } else {
        vec![
            FrequencyInterval::new(low, nyquist),
            FrequencyInterval::new(-nyquist, high - fs),
        ]
    }
}

/// Positive and negative signal bands after folding into the baseband.
#[derive(Debug, Clone, PartialEq)]
pub struct BandImages {
    pub sampling_rate: f64,
    /// Image of `[F0 - B/2, F0 + B/2]`
    pub positive: Vec<FrequencyInterval>,
    /// Image of `[-F0 - B/2, -F0 + B/2]`
    pub negative: Vec<FrequencyInterval>,
}

impl BandImages {
    pub fn new(signal: &NarrowbandSignal, fs: f64) -> Self {
        let band = signal.band();
        let mirror = FrequencyInterval::new(-band.high, -band.low);
        Self {
            sampling_rate: fs,
            positive: fold_interval(&band, fs),
            negative: fold_interval(&mirror, fs),
        }
    }

    /// Regions where the two images overlap.
    pub fn overlaps(&self) -> Vec<FrequencyInterval> {
        self.positive
            .iter()
            .flat_map(|p| self.negative.iter().filter_map(move |n| p.overlap(n)))
            .collect()
    }

    pub fn is_alias_free(&self) -> bool {
        self.overlaps().is_empty()
    }

    /// Where the overlap sits, or `None` when the images are disjoint.
    pub fn alias_kind(&self) -> Option<AliasKind> {
        let overlaps = self.overlaps();
        if overlaps.is_empty() {
            None
        } else if overlaps.iter().any(|o| o.contains(0.0)) {
            Some(AliasKind::ZeroFrequency)
        } else {
            Some(AliasKind::Nyquist)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signal() -> NarrowbandSignal {
        NarrowbandSignal::default()
    }

    #[test]
    fn test_derived_intervals_match_static_list() {
        let derived: Vec<(i64, i64)> = excluded_intervals(&signal())
            .iter()
            .map(FrequencyInterval::rounded)
            .collect();
        assert_eq!(derived, STATIC_EXCLUDED_INTERVALS.to_vec());
    }

    #[test]
    fn test_minimum_rate_is_440() {
        assert_eq!(
            minimum_alias_free_rate(&signal(), 300.0, 4000.0),
            Some(440.0)
        );
        assert_eq!(
            minimum_alias_free_rate(&signal(), 1200.0, 4000.0),
            Some(1200.0)
        );
    }

    #[test]
    fn test_exclusion_order() {
        assert_eq!(exclusion_order(&signal(), 2000.0), Some(1));
        assert_eq!(exclusion_order(&signal(), 1000.0), Some(2));
        assert_eq!(exclusion_order(&signal(), 650.0), Some(3));
        assert_eq!(exclusion_order(&signal(), 500.0), Some(4));
        assert_eq!(exclusion_order(&signal(), 440.0), None);
        assert_eq!(exclusion_order(&signal(), 3000.0), None);
    }

    #[test]
    fn test_fold_into_baseband() {
        assert_eq!(fold(900.0, 440.0), 20.0);
        assert_eq!(fold(-1100.0, 440.0), -220.0);
        assert_eq!(fold(100.0, 4000.0), 100.0);
        assert_eq!(fold(2000.0, 4000.0), -2000.0);
    }

    #[test]
    fn test_fold_interval_wraps_past_nyquist() {
        let pieces = fold_interval(&FrequencyInterval::new(900.0, 1100.0), 650.0);
        assert_eq!(
            pieces,
            vec![
                FrequencyInterval::new(250.0, 325.0),
                FrequencyInterval::new(-325.0, -200.0),
            ]
        );
    }

    #[test]
    fn test_images_touch_but_do_not_overlap_at_440() {
        let images = BandImages::new(&signal(), 440.0);
        assert_eq!(images.positive, vec![FrequencyInterval::new(20.0, 220.0)]);
        assert_eq!(images.negative, vec![FrequencyInterval::new(-220.0, -20.0)]);
        assert!(images.is_alias_free());
        assert_eq!(images.alias_kind(), None);
    }

    #[test]
    fn test_even_order_overlaps_at_zero() {
        let images = BandImages::new(&signal(), 500.0);
        assert_eq!(images.alias_kind(), Some(AliasKind::ZeroFrequency));
    }

    #[test]
    fn test_odd_order_overlaps_at_nyquist() {
        let images = BandImages::new(&signal(), 650.0);
        assert_eq!(images.alias_kind(), Some(AliasKind::Nyquist));
    }

    #[test]
    fn test_image_overlap_agrees_with_excluded_intervals() {
        let signal = signal();
        for fs in 300..=4000 {
            let fs = fs as f64;
            assert_eq!(
                BandImages::new(&signal, fs).is_alias_free(),
                is_alias_free(&signal, fs),
                "disagreement at Fs = {} Hz",
                fs
            );
        }
    }
}
