//! Closed frequency intervals.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Slack for interval comparisons; folded edges come out of float arithmetic.
pub(crate) const EDGE_TOLERANCE: f64 = 1e-9;

/// Closed interval `[low, high]` in Hz.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyInterval {
    pub low: f64,
    pub high: f64,
}

impl FrequencyInterval {
    /// Build an interval; the bounds may be given in either order.
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            low: a.min(b),
            high: a.max(b),
        }
    }

    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    pub fn center(&self) -> f64 {
        (self.low + self.high) / 2.0
    }

    /// `low <= freq <= high`
    pub fn contains(&self, freq: f64) -> bool {
        freq >= self.low - EDGE_TOLERANCE && freq <= self.high + EDGE_TOLERANCE
    }

    /// `low < freq < high`; edges do not count.
    pub fn contains_strictly(&self, freq: f64) -> bool {
        freq > self.low + EDGE_TOLERANCE && freq < self.high - EDGE_TOLERANCE
    }

    /// Common part of two intervals, if they share more than a single edge.
    pub fn overlap(&self, other: &Self) -> Option<Self> {
        let low = self.low.max(other.low);
        let high = self.high.min(other.high);
        (high - low > EDGE_TOLERANCE).then_some(Self { low, high })
    }

    /// Bounds rounded to whole hertz, as shown in the commentary.
    pub fn rounded(&self) -> (i64, i64) {
        (self.low.round() as i64, self.high.round() as i64)
    }
}

impl fmt::Display for FrequencyInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (low, high) = self.rounded();
        write!(f, "[{}, {}]", low, high)
    }
}

/// Sort intervals by lower bound and merge any that touch or overlap.
pub fn merge(mut intervals: Vec<FrequencyInterval>) -> Vec<FrequencyInterval> {
    intervals.sort_by(|a, b| a.low.total_cmp(&b.low));

    let mut merged: Vec<FrequencyInterval> = Vec::with_capacity(intervals.len());
    for interval in intervals {
        match merged.last_mut() {
            Some(last) if interval.low <= last.high + EDGE_TOLERANCE => {
                last.high = last.high.max(interval.high);
            }
            _ => merged.push(interval),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_orders_bounds() {
        let interval = FrequencyInterval::new(1100.0, 900.0);
        assert_eq!(interval.low, 900.0);
        assert_eq!(interval.high, 1100.0);
        assert_eq!(interval.width(), 200.0);
        assert_eq!(interval.center(), 1000.0);
    }

    #[test]
    fn test_strict_containment_excludes_edges() {
        let interval = FrequencyInterval::new(450.0, 550.0);
        assert!(interval.contains(450.0));
        assert!(!interval.contains_strictly(450.0));
        assert!(interval.contains_strictly(500.0));
    }

    #[test]
    fn test_touching_intervals_do_not_overlap() {
        let a = FrequencyInterval::new(20.0, 220.0);
        let b = FrequencyInterval::new(-220.0, -20.0);
        let c = FrequencyInterval::new(220.0, 300.0);
        assert_eq!(a.overlap(&b), None);
        assert_eq!(a.overlap(&c), None);
        assert_eq!(
            a.overlap(&FrequencyInterval::new(200.0, 300.0)),
            Some(FrequencyInterval::new(200.0, 220.0))
        );
    }

    #[test]
    fn test_merge_sorts_and_joins() {
        let merged = merge(vec![
            FrequencyInterval::new(360.0, 440.0),
            FrequencyInterval::new(900.0, 1100.0),
            FrequencyInterval::new(0.0, 400.0),
            FrequencyInterval::new(300.0, 366.0),
        ]);
        assert_eq!(
            merged,
            vec![
                FrequencyInterval::new(0.0, 440.0),
                FrequencyInterval::new(900.0, 1100.0),
            ]
        );
    }

    #[test]
    fn test_display_rounds() {
        let interval = FrequencyInterval::new(600.0, 2200.0 / 3.0);
        assert_eq!(interval.to_string(), "[600, 733]");
    }
}
