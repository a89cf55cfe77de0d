//! Signal demo pipeline.
//!
//! One sampling frequency in, one [`DemoFrame`] out:
//!
//! ```text
//! Fs ─► synthesize ─► analyze ─► tile replicas ─► DemoFrame ─► Presenter
//! ```
//!
//! Every run starts from scratch; identical input yields identical frames.

mod rate;

pub use rate::SamplingRate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::aliasing::{self, AliasKind, BandImages, FrequencyInterval};
use crate::dsp::{analyze, ReplicaSpectrum, Signal, Spectrum, TimeGrid};
use crate::io::AudioClip;
use crate::synth::NarrowbandSignal;

/// Time-domain plot shows `[-TIME_VIEW_HALF_WIDTH_S, TIME_VIEW_HALF_WIDTH_S)`
pub const TIME_VIEW_HALF_WIDTH_S: f64 = 0.01;
/// Rate of the dense trace drawn as the continuous reference
pub const TIME_VIEW_RATE_HZ: f64 = 20_000.0;

/// Short time window for the time-domain plot.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct TimeView {
    /// Densely rendered reference expression
    pub reference: Signal,
    /// Sampling instants at Fs inside the window
    pub sampled: Signal,
}

/// Aliasing verdict for the current sampling frequency.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct AliasStatus {
    /// No excluded interval contains Fs
    pub alias_free: bool,
    /// Where the images overlap, when they do
    pub kind: Option<AliasKind>,
    /// `k` of the excluded interval `[(2F0-B)/k, (2F0+B)/k]` containing Fs
    pub order: Option<u32>,
    /// Overlapping regions of the folded images, in baseband
    pub overlaps: Vec<FrequencyInterval>,
}

/// Everything the presentation layer needs for one sampling frequency.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct DemoFrame {
    pub sampling_rate: SamplingRate,
    /// Narrowband signal at the fixed reference rate
    pub reference: Signal,
    /// Same expression evaluated at Fs
    pub sampled: Signal,
    pub reference_spectrum: Spectrum,
    pub sampled_spectrum: Spectrum,
    /// Sampled spectrum tiled at multiples of Fs
    pub replicas: ReplicaSpectrum,
    /// `[-Fs/2, Fs/2]`
    pub nyquist_markers: [f64; 2],
    pub time_view: TimeView,
    pub alias: AliasStatus,
}

impl DemoFrame {
    /// Reference signal as a playable clip at its synthesis rate.
    pub fn reference_clip(&self) -> AudioClip {
        AudioClip::from_signal(&self.reference)
    }

    /// Sampled signal as a playable clip at Fs.
    pub fn sampled_clip(&self) -> AudioClip {
        AudioClip::from_signal(&self.sampled)
    }
}

/// The synthesis → analysis → replica pipeline for one narrowband signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct SamplingDemo {
    signal: NarrowbandSignal,
}

impl SamplingDemo {
    pub fn new(signal: NarrowbandSignal) -> Self {
        Self { signal }
    }

    pub fn signal(&self) -> &NarrowbandSignal {
        &self.signal
    }

    /// Run the whole pipeline for `rate`.
    pub fn run(&self, rate: SamplingRate) -> DemoFrame {
        let fs = rate.as_f64();

        let reference = self.signal.reference();
        let sampled = self.signal.sample(fs);

        let reference_spectrum = analyze(&reference);
        let sampled_spectrum = analyze(&sampled);
        let replicas = ReplicaSpectrum::build(&sampled_spectrum, fs);

        let time_view = TimeView {
            reference: self
                .signal
                .synthesize(&TimeGrid::symmetric(TIME_VIEW_HALF_WIDTH_S, TIME_VIEW_RATE_HZ)),
            sampled: self
                .signal
                .synthesize(&TimeGrid::symmetric(TIME_VIEW_HALF_WIDTH_S, fs)),
        };

        let images = BandImages::new(&self.signal, fs);
        let alias = AliasStatus {
            alias_free: aliasing::is_alias_free(&self.signal, fs),
            kind: images.alias_kind(),
            order: aliasing::exclusion_order(&self.signal, fs),
            overlaps: images.overlaps(),
        };

        log::debug!(
            "pipeline run: Fs = {}, {} samples, {} replica points, alias_free = {}",
            rate,
            sampled.len(),
            replicas.len(),
            alias.alias_free
        );

        DemoFrame {
            sampling_rate: rate,
            reference,
            sampled,
            reference_spectrum,
            sampled_spectrum,
            replicas,
            nyquist_markers: [-rate.nyquist(), rate.nyquist()],
            time_view,
            alias,
        }
    }
}
