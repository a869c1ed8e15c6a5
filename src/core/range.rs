use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Scale tolerance used by `AxisRange` equality.
pub const SCALE_PRECISION: f64 = 0.000_001;

/// Default duration of an animated range change.
pub const RANGE_ANIMATION_DURATION: Duration = Duration::from_millis(700);

/// Immutable snapshot of axis bounds, tick spacing and pixel scale.
///
/// Bounds and tick unit are coordinates (whole units from the axis base).
/// Equality is exact on the integer fields and tolerant of floating-point
/// noise in `scale`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AxisRange {
    pub lower_bound: i64,
    pub upper_bound: i64,
    pub tick_unit: i64,
    pub scale: f64,
}

impl AxisRange {
    #[must_use]
    pub fn new(lower_bound: i64, upper_bound: i64, tick_unit: i64, scale: f64) -> Self {
        Self {
            lower_bound,
            upper_bound,
            tick_unit,
            scale,
        }
    }

    #[must_use]
    pub fn span(self) -> i64 {
        self.upper_bound.saturating_sub(self.lower_bound)
    }

    #[must_use]
    pub fn contains(self, value: i64) -> bool {
        self.lower_bound <= value && value <= self.upper_bound
    }
}

impl PartialEq for AxisRange {
    fn eq(&self, other: &Self) -> bool {
        self.lower_bound == other.lower_bound
            && self.upper_bound == other.upper_bound
            && self.tick_unit == other.tick_unit
            && (self.scale - other.scale).abs() < SCALE_PRECISION
    }
}

/// Mutable per-layout axis state owned by the layout layer.
///
/// `offset` is the length of the axis track along its primary direction, as
/// seen by the last scale computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisState {
    pub lower_bound: i64,
    pub upper_bound: i64,
    pub tick_unit: i64,
    pub scale: f64,
    pub inverted: bool,
    pub offset: f64,
}

impl AxisState {
    #[must_use]
    pub fn range(&self) -> AxisRange {
        AxisRange::new(
            self.lower_bound,
            self.upper_bound,
            self.tick_unit,
            self.scale,
        )
    }

    /// Replaces bounds, tick unit and scale from `range`.
    pub fn apply_range(&mut self, range: AxisRange) {
        self.lower_bound = range.lower_bound;
        self.upper_bound = range.upper_bound;
        self.tick_unit = range.tick_unit;
        self.scale = range.scale;
    }
}

impl Default for AxisState {
    fn default() -> Self {
        Self {
            lower_bound: 0,
            upper_bound: 100,
            tick_unit: 5,
            scale: 1.0,
            inverted: false,
            offset: 0.0,
        }
    }
}

/// Interpolated lower bound and scale at one point of a range transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeFrame {
    pub lower_bound: f64,
    pub scale: f64,
}

/// Start and end ranges of an animated range change.
///
/// The core never animates; the host interpolates between `from` and `to`
/// over `duration` and feeds the sampled frames to its renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeTransition {
    pub from: AxisRange,
    pub to: AxisRange,
    pub duration: Duration,
}

impl RangeTransition {
    #[must_use]
    pub fn new(from: AxisRange, to: AxisRange) -> Self {
        Self {
            from,
            to,
            duration: RANGE_ANIMATION_DURATION,
        }
    }

    /// Linearly interpolates lower bound and scale at `progress` in `[0, 1]`.
    #[must_use]
    pub fn sample(&self, progress: f64) -> RangeFrame {
        let t = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            1.0
        };
        let from_lower = self.from.lower_bound as f64;
        let to_lower = self.to.lower_bound as f64;
        RangeFrame {
            lower_bound: from_lower + (to_lower - from_lower) * t,
            scale: self.from.scale + (self.to.scale - self.from.scale) * t,
        }
    }

    /// Samples the transition at `elapsed` time since it started.
    #[must_use]
    pub fn sample_at(&self, elapsed: Duration) -> RangeFrame {
        if self.duration.is_zero() {
            return self.sample(1.0);
        }
        self.sample(elapsed.as_secs_f64() / self.duration.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{AxisRange, RangeTransition};

    #[test]
    fn equality_tolerates_scale_noise_below_precision() {
        let base = AxisRange::new(-54, 60, 6, 0.0);
        assert_eq!(base, AxisRange::new(-54, 60, 6, 9e-7));
        assert_eq!(base, AxisRange::new(-54, 60, 6, -9.99e-7));
        assert_ne!(base, AxisRange::new(-54, 60, 6, 1e-6));
        assert_ne!(base, AxisRange::new(-54, 60, 6, -2e-6));

        let scaled = AxisRange::new(0, 20, 10, 0.5);
        assert_eq!(scaled, AxisRange::new(0, 20, 10, 0.5 + 2f64.powi(-20)));
        assert_ne!(scaled, AxisRange::new(0, 20, 10, 0.5 + 2f64.powi(-19)));
    }

    #[test]
    fn equality_is_exact_on_bounds_and_tick_unit() {
        let range = AxisRange::new(0, 20, 10, 5.0);
        assert_ne!(range, AxisRange::new(1, 20, 10, 5.0));
        assert_ne!(range, AxisRange::new(0, 21, 10, 5.0));
        assert_ne!(range, AxisRange::new(0, 20, 5, 5.0));
    }

    #[test]
    fn transition_sample_is_clamped_to_endpoints() {
        let transition = RangeTransition::new(
            AxisRange::new(0, 20, 10, 5.0),
            AxisRange::new(10, 40, 5, 1.0),
        );
        let start = transition.sample(-1.0);
        let mid = transition.sample_at(Duration::from_millis(350));
        let end = transition.sample_at(Duration::from_secs(5));

        assert_eq!(start.lower_bound, 0.0);
        assert_eq!(start.scale, 5.0);
        assert!((mid.lower_bound - 5.0).abs() <= 1e-9);
        assert!((mid.scale - 3.0).abs() <= 1e-9);
        assert_eq!(end.lower_bound, 10.0);
        assert_eq!(end.scale, 1.0);
    }
}
