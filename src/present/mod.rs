//! Presentation boundary.
//!
//! The numeric core hands a [`DemoFrame`] to whatever implements [`Presenter`]:
//! the terminal UI in the `shannon` binary, the headless [`TextReport`], or a
//! test double. Plot bounds live here so every presenter frames the data the
//! same way.

mod report;

pub use report::TextReport;

use crate::error::Result;
use crate::pipeline::DemoFrame;

/// Frequency axis of the spectral view (Hz)
pub const SPECTRUM_FREQ_BOUNDS: [f64; 2] = [-2000.0, 2000.0];
/// Magnitude axis of the spectral view
pub const SPECTRUM_MAGNITUDE_BOUNDS: [f64; 2] = [0.0, 0.006];
/// Time axis of the time-domain view (s)
pub const TIME_BOUNDS: [f64; 2] = [-0.01, 0.01];
/// Amplitude axis of the time-domain view
pub const AMPLITUDE_BOUNDS: [f64; 2] = [-1.1, 1.1];

/// Consumer of pipeline output.
pub trait Presenter {
    /// Show one frame. Called after every change of sampling frequency.
    fn present(&mut self, frame: &DemoFrame) -> Result<()>;
}

/// Keep only the points whose x coordinate lies in `bounds`.
pub fn clip_to_bounds(points: &[(f64, f64)], bounds: [f64; 2]) -> Vec<(f64, f64)> {
    points
        .iter()
        .copied()
        .filter(|(x, _)| *x >= bounds[0] && *x <= bounds[1])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_to_bounds_is_inclusive() {
        let points = [(-3.0, 1.0), (-2.0, 2.0), (0.0, 3.0), (2.0, 4.0), (2.5, 5.0)];
        assert_eq!(
            clip_to_bounds(&points, [-2.0, 2.0]),
            vec![(-2.0, 2.0), (0.0, 3.0), (2.0, 4.0)]
        );
    }
}
