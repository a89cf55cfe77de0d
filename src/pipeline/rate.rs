//! Sampling frequency newtype with slider bounds.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_SAMPLING_RATE_HZ, MAX_SAMPLING_RATE_HZ, MIN_SAMPLING_RATE_HZ};
use crate::error::{DemoError, Result};

/// Sampling frequency in whole hertz, always within
/// `[MIN_SAMPLING_RATE_HZ, MAX_SAMPLING_RATE_HZ]`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SamplingRate(u32);

impl SamplingRate {
    pub const MIN: SamplingRate = SamplingRate(MIN_SAMPLING_RATE_HZ);
    pub const MAX: SamplingRate = SamplingRate(MAX_SAMPLING_RATE_HZ);

    /// Validate `hz` against the slider bounds.
    pub fn new(hz: u32) -> Result<Self> {
        if (MIN_SAMPLING_RATE_HZ..=MAX_SAMPLING_RATE_HZ).contains(&hz) {
            Ok(Self(hz))
        } else {
            Err(DemoError::SamplingRateOutOfRange {
                hz,
                min: MIN_SAMPLING_RATE_HZ,
                max: MAX_SAMPLING_RATE_HZ,
            })
        }
    }

    /// Saturate `hz` into the slider bounds.
    pub fn clamped(hz: i64) -> Self {
        let hz = hz.clamp(MIN_SAMPLING_RATE_HZ as i64, MAX_SAMPLING_RATE_HZ as i64);
        Self(hz as u32)
    }

    /// Move by `delta_hz`, stopping at the bounds.
    pub fn offset(self, delta_hz: i64) -> Self {
        Self::clamped(self.0 as i64 + delta_hz)
    }

    #[inline]
    pub fn hz(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }

    /// Folding frequency `Fs / 2`
    #[inline]
    pub fn nyquist(self) -> f64 {
        self.as_f64() / 2.0
    }
}

impl Default for SamplingRate {
    fn default() -> Self {
        Self(DEFAULT_SAMPLING_RATE_HZ)
    }
}

impl TryFrom<u32> for SamplingRate {
    type Error = DemoError;

    fn try_from(hz: u32) -> Result<Self> {
        Self::new(hz)
    }
}

impl From<SamplingRate> for u32 {
    fn from(rate: SamplingRate) -> u32 {
        rate.0
    }
}

impl fmt::Display for SamplingRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Hz", self.0)
    }
}
