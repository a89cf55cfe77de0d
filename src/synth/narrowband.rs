//! Narrowband test signal.
//!
//! A carrier at `F0` windowed by `sinc(B·t)`, whose spectrum is a flat band of
//! width `B` centered on `±F0`, plus a faint tone at `F0 + B/3` that makes the
//! band audibly asymmetric:
//!
//! ```text
//! x(t) = cos(2π·F0·t)·sinc(B·t) + 0.01·cos(2π·(F0 + B/3)·t)
//! ```

use std::f64::consts::PI;

use crate::aliasing::FrequencyInterval;
use crate::dsp::{sinc::sinc, Signal, TimeGrid};

/// Carrier (central) frequency F0 in Hz
pub const CENTER_FREQUENCY_HZ: f64 = 1000.0;
/// Signal bandwidth B in Hz
pub const BANDWIDTH_HZ: f64 = 200.0;
/// Amplitude of the secondary tone
pub const TONE_AMPLITUDE: f64 = 0.01;
/// Rate of the reference rendering, high enough to avoid aliasing on screen
pub const REFERENCE_RATE_HZ: f64 = 4000.0;
/// Analysis window is `[-HALF_WINDOW_S, HALF_WINDOW_S)`
pub const HALF_WINDOW_S: f64 = 0.1;

/// Parameters of the narrowband signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NarrowbandSignal {
    /// Central frequency F0 (Hz)
    pub center_hz: f64,
    /// Bandwidth B (Hz)
    pub bandwidth_hz: f64,
    /// Secondary tone amplitude
    pub tone_amplitude: f64,
}

impl Default for NarrowbandSignal {
    fn default() -> Self {
        Self {
            center_hz: CENTER_FREQUENCY_HZ,
            bandwidth_hz: BANDWIDTH_HZ,
            tone_amplitude: TONE_AMPLITUDE,
        }
    }
}

impl NarrowbandSignal {
    /// Frequency of the secondary tone: `F0 + B/3`
    #[inline]
    pub fn tone_hz(&self) -> f64 {
        self.center_hz + self.bandwidth_hz / 3.0
    }

    /// Occupied band `[F0 - B/2, F0 + B/2]`
    pub fn band(&self) -> FrequencyInterval {
        let half = self.bandwidth_hz / 2.0;
        FrequencyInterval::new(self.center_hz - half, self.center_hz + half)
    }

    /// Closed-form amplitude at time `t` (seconds).
    #[inline]
    pub fn amplitude(&self, t: f64) -> f64 {
        (2.0 * PI * self.center_hz * t).cos() * sinc(self.bandwidth_hz * t)
            + self.tone_amplitude * (2.0 * PI * self.tone_hz() * t).cos()
    }

    /// Evaluate the signal at every point of `grid`.
    pub fn synthesize(&self, grid: &TimeGrid) -> Signal {
        let times: Vec<f64> = grid.times().collect();
        let samples = times.iter().map(|&t| self.amplitude(t)).collect();
        Signal::new(grid.rate, times, samples)
    }

    /// Reference rendering at [`REFERENCE_RATE_HZ`] over the analysis window.
    pub fn reference(&self) -> Signal {
        self.synthesize(&TimeGrid::symmetric(HALF_WINDOW_S, REFERENCE_RATE_HZ))
    }

    /// The same expression sampled at `rate` Hz over the analysis window.
    pub fn sample(&self, rate: f64) -> Signal {
        self.synthesize(&TimeGrid::symmetric(HALF_WINDOW_S, rate))
    }
}
