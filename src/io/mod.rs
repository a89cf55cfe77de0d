// Purpose - playable waveforms and their export formats

pub mod wav;

use crate::dsp::Signal;

/// Peak level clips are normalized to
pub const CLIP_PEAK: f32 = 1.0;

/// A mono waveform ready for playback or export.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioClip {
    /// Playback rate in Hz
    pub sample_rate: u32,
    /// Samples in `[-CLIP_PEAK, CLIP_PEAK]`
    pub samples: Vec<f32>,
}

impl AudioClip {
    /// Convert a signal into a clip at its own rate, scaled so the loudest
    /// sample reaches [`CLIP_PEAK`]. A silent signal stays silent.
    pub fn from_signal(signal: &Signal) -> Self {
        let peak = signal.peak();
        let gain = if peak > 0.0 {
            CLIP_PEAK as f64 / peak
        } else {
            0.0
        };
        Self {
            sample_rate: signal.sample_rate.round() as u32,
            samples: signal.samples.iter().map(|&s| (s * gain) as f32).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Length in seconds
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            0.0
        } else {
            self.samples.len() as f64 / self.sample_rate as f64
        }
    }

    /// The clip played back `times` times in a row.
    pub fn looped(&self, times: u32) -> Self {
        let mut samples = Vec::with_capacity(self.samples.len() * times as usize);
        for _ in 0..times {
            samples.extend_from_slice(&self.samples);
        }
        Self {
            sample_rate: self.sample_rate,
            samples,
        }
    }

    /// Linearly interpolate the clip onto `target_rate`, the way a DAC
    /// running at the device rate would reconstruct it.
    pub fn resampled(&self, target_rate: u32) -> Self {
        if self.sample_rate == target_rate || self.samples.len() < 2 || target_rate == 0 {
            return Self {
                sample_rate: target_rate,
                samples: self.samples.clone(),
            };
        }

        let ratio = self.sample_rate as f64 / target_rate as f64;
        let out_len = (self.duration_secs() * target_rate as f64).round() as usize;
        let last = self.samples.len() - 1;

        let samples = (0..out_len)
            .map(|i| {
                let pos = i as f64 * ratio;
                let idx = (pos.floor() as usize).min(last);
                let next = (idx + 1).min(last);
                let frac = (pos - idx as f64).clamp(0.0, 1.0) as f32;
                self.samples[idx] + (self.samples[next] - self.samples[idx]) * frac
            })
            .collect();

        Self {
            sample_rate: target_rate,
            samples,
        }
    }
}
