//! Demo configuration and its defaults.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::pipeline::SamplingRate;

/// Lowest selectable sampling frequency (Hz)
pub const MIN_SAMPLING_RATE_HZ: u32 = 300;
/// Highest selectable sampling frequency (Hz)
pub const MAX_SAMPLING_RATE_HZ: u32 = 4000;
/// Sampling frequency on startup (Hz)
pub const DEFAULT_SAMPLING_RATE_HZ: u32 = 4000;

/// Runtime settings for the interactive demo.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// Initial sampling frequency
    pub sampling_rate: SamplingRate,
    /// Hz moved per fine adjustment
    pub fine_step_hz: u32,
    /// Hz moved per coarse adjustment
    pub coarse_step_hz: u32,
    /// How many times a clip loops when played (clips are 0.2 s long)
    pub playback_repeats: u32,
    /// Whether to open an audio output device
    pub audio_enabled: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            sampling_rate: SamplingRate::default(),
            fine_step_hz: 10,
            coarse_step_hz: 100,
            playback_repeats: 5,
            audio_enabled: true,
        }
    }
}

impl DemoConfig {
    pub fn sampling_rate(mut self, rate: SamplingRate) -> Self {
        self.sampling_rate = rate;
        self
    }

    pub fn fine_step(mut self, hz: u32) -> Self {
        self.fine_step_hz = hz.max(1);
        self
    }

    pub fn coarse_step(mut self, hz: u32) -> Self {
        self.coarse_step_hz = hz.max(1);
        self
    }

    pub fn playback_repeats(mut self, repeats: u32) -> Self {
        self.playback_repeats = repeats.max(1);
        self
    }

    pub fn audio(mut self, enabled: bool) -> Self {
        self.audio_enabled = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DemoConfig::default();
        assert_eq!(config.sampling_rate.hz(), DEFAULT_SAMPLING_RATE_HZ);
        assert_eq!(config.fine_step_hz, 10);
        assert_eq!(config.coarse_step_hz, 100);
        assert!(config.audio_enabled);
    }

    #[test]
    fn test_builder_floors_steps_at_one() {
        let config = DemoConfig::default()
            .fine_step(0)
            .coarse_step(0)
            .playback_repeats(0)
            .audio(false);
        assert_eq!(config.fine_step_hz, 1);
        assert_eq!(config.coarse_step_hz, 1);
        assert_eq!(config.playback_repeats, 1);
        assert!(!config.audio_enabled);
    }
}
