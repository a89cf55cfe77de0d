//! Uniform, half-open time grids.
//!
//! A grid covers `[start, stop)` with spacing `1 / rate`. Points are computed
//! as `start + i / rate` rather than by accumulation so that every rate whose
//! period divides the window lands exactly on `t = 0`.

/// Slack used when counting grid points, so `0.2 s * 4000 Hz` yields 800
/// points even when the product rounds up to `800.0000000000001`.
const LENGTH_TOLERANCE: f64 = 1e-9;

/// Half-open time grid `[start, stop)` sampled at `rate` Hz.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeGrid {
    /// First time point (seconds)
    pub start: f64,
    /// Exclusive end (seconds)
    pub stop: f64,
    /// Points per second (Hz)
    pub rate: f64,
}

impl TimeGrid {
    pub fn new(start: f64, stop: f64, rate: f64) -> Self {
        Self { start, stop, rate }
    }

    /// Grid symmetric about zero: `[-half_width, half_width)`.
    pub fn symmetric(half_width: f64, rate: f64) -> Self {
        Self::new(-half_width, half_width, rate)
    }

    /// Spacing between consecutive points (seconds)
    #[inline]
    pub fn step(&self) -> f64 {
        1.0 / self.rate
    }

    /// Window width `stop - start` (seconds)
    #[inline]
    pub fn width(&self) -> f64 {
        self.stop - self.start
    }

    /// Number of points in the grid.
    pub fn len(&self) -> usize {
        let span = self.width() * self.rate;
        if span <= 0.0 {
            0
        } else {
            (span - LENGTH_TOLERANCE).ceil().max(0.0) as usize
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Time of the `i`-th point.
    #[inline]
    pub fn time_at(&self, i: usize) -> f64 {
        self.start + i as f64 / self.rate
    }

    /// Iterate over every time point in order.
    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len()).map(move |i| self.time_at(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_matches_window_times_rate() {
        assert_eq!(TimeGrid::symmetric(0.1, 4000.0).len(), 800);
        assert_eq!(TimeGrid::symmetric(0.1, 300.0).len(), 60);
        assert_eq!(TimeGrid::symmetric(0.1, 440.0).len(), 88);
        assert_eq!(TimeGrid::symmetric(0.01, 20_000.0).len(), 400);
    }

    #[test]
    fn test_length_rounds_up_for_fractional_span() {
        // 0.2 s at 333 Hz = 66.6 points, rounded up to 67
        assert_eq!(TimeGrid::symmetric(0.1, 333.0).len(), 67);
    }

    #[test]
    fn test_stop_is_excluded() {
        let grid = TimeGrid::symmetric(0.1, 4000.0);
        let last = grid.time_at(grid.len() - 1);
        assert!(last < 0.1);
        assert!((last - (0.1 - 1.0 / 4000.0)).abs() < 1e-12);
    }

    #[test]
    fn test_hits_zero_exactly() {
        for &rate in &[440.0, 500.0, 650.0, 4000.0] {
            let grid = TimeGrid::symmetric(0.1, rate);
            assert!(
                grid.times().any(|t| t == 0.0),
                "grid at {} Hz should contain t = 0",
                rate
            );
        }
    }

    #[test]
    fn test_empty_when_stop_before_start() {
        let grid = TimeGrid::new(0.1, -0.1, 1000.0);
        assert!(grid.is_empty());
        assert_eq!(grid.times().count(), 0);
    }
}
