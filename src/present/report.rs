//! Plain-text summary of a frame, for headless runs.

use std::io::Write;

use super::Presenter;
use crate::aliasing::{self, AliasKind};
use crate::config::{MAX_SAMPLING_RATE_HZ, MIN_SAMPLING_RATE_HZ};
use crate::error::Result;
use crate::pipeline::DemoFrame;
use crate::synth::NarrowbandSignal;

/// Writes a short report per frame to any `Write` sink.
pub struct TextReport<W: Write> {
    out: W,
    signal: NarrowbandSignal,
}

impl<W: Write> TextReport<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            signal: NarrowbandSignal::default(),
        }
    }

    /// Give back the sink, e.g. to inspect a `Vec<u8>` in tests.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for TextReport<W> {
    fn present(&mut self, frame: &DemoFrame) -> Result<()> {
        let out = &mut self.out;
        let band = self.signal.band();

        writeln!(out, "Sampling frequency: {}", frame.sampling_rate)?;
        writeln!(out, "Nyquist frequency:  {:.1} Hz", frame.sampling_rate.nyquist())?;
        writeln!(
            out,
            "Signal:             F0 = {} Hz, B = {} Hz, band {}",
            self.signal.center_hz, self.signal.bandwidth_hz, band
        )?;
        writeln!(
            out,
            "Samples:            reference {} @ {} Hz, sampled {} @ {}",
            frame.reference.len(),
            frame.reference.sample_rate,
            frame.sampled.len(),
            frame.sampling_rate
        )?;

        if let Some((freq, magnitude)) = frame.sampled_spectrum.peak_within(0.0, f64::INFINITY) {
            writeln!(
                out,
                "Sampled peak:       {:.6} at {:.1} Hz (resolution {:.1} Hz)",
                magnitude,
                freq,
                frame.sampled_spectrum.resolution()
            )?;
        }

        let verdict = match (&frame.alias.kind, frame.alias.order) {
            (None, _) => "no aliasing".to_string(),
            (Some(AliasKind::ZeroFrequency), Some(k)) => {
                format!("aliasing (k = {}, images overlap at 0 Hz)", k)
            }
            (Some(AliasKind::Nyquist), Some(k)) => {
                format!("aliasing (k = {}, images overlap at Fs/2)", k)
            }
            (Some(_), None) => "aliasing (Fs < 2B)".to_string(),
        };
        writeln!(out, "Verdict:            {}", verdict)?;

        let excluded: Vec<String> = aliasing::excluded_intervals(&self.signal)
            .iter()
            .map(ToString::to_string)
            .collect();
        writeln!(out, "Excluded Fs:        {}", excluded.join(" ∪ "))?;

        if let Some(min) = aliasing::minimum_alias_free_rate(
            &self.signal,
            MIN_SAMPLING_RATE_HZ as f64,
            MAX_SAMPLING_RATE_HZ as f64,
        ) {
            writeln!(out, "Minimum usable Fs:  {:.0} Hz", min)?;
        }

        out.flush()?;
        Ok(())
    }
}
