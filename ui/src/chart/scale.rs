//! Linear value → pixel mapping shared by both chart variants.

use crate::core::config::ChartConfig;
use crate::series::SeriesPoint;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    min: f64,
    max: f64,
    top: f64,
    baseline: f64,
}

impl LinearScale {
    /// Scale spanning the extent of `points` inside the configured viewport.
    /// An empty slice yields a degenerate scale that maps to the baseline.
    pub fn fit(points: &[SeriesPoint], config: &ChartConfig) -> Self {
        let (min, max) = value_extent(points).unwrap_or((0.0, 0.0));
        Self {
            min,
            max,
            top: config.padding,
            baseline: config.baseline(),
        }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn is_flat(&self) -> bool {
        self.max - self.min <= f64::EPSILON
    }

    /// `baseline - (value - min) * (baseline - top) / (max - min)`.
    ///
    /// The minimum lands on the baseline and the maximum on the top edge. A
    /// flat extent maps everything to the baseline.
    pub fn y(&self, value: f64) -> f64 {
        if self.is_flat() {
            return self.baseline;
        }
        self.baseline - (value - self.min) * (self.baseline - self.top) / (self.max - self.min)
    }
}

/// `(min, max)` of the point values, ignoring NaNs. `None` when nothing is finite.
pub fn value_extent(points: &[SeriesPoint]) -> Option<(f64, f64)> {
    points
        .iter()
        .map(|point| point.value)
        .filter(|value| value.is_finite())
        .fold(None, |acc, value| match acc {
            None => Some((value, value)),
            Some((lo, hi)) => Some((lo.min(value), hi.max(value))),
        })
}
