use tracing::warn;

use crate::core::range::AxisRange;

/// Major tick count above which generation is skipped.
pub const MAX_MAJOR_TICKS: i64 = 2_000;
/// Minor tick count above which generation is skipped.
pub const MAX_MINOR_TICKS: f64 = 10_000.0;

/// Coordinates of every major tick in `range`, ascending.
///
/// The upper bound is always the last element, even when it is not aligned
/// to `tick_unit`. A non-positive tick unit yields just the two bounds.
#[must_use]
pub fn major_ticks(range: AxisRange) -> Vec<i64> {
    let AxisRange {
        lower_bound: lower,
        upper_bound: upper,
        tick_unit,
        ..
    } = range;

    if lower == upper {
        return vec![lower];
    }
    if tick_unit <= 0 {
        return vec![lower, upper];
    }

    let projected = (i128::from(upper) - i128::from(lower)) / i128::from(tick_unit);
    let mut ticks = Vec::new();
    if projected > i128::from(MAX_MAJOR_TICKS) {
        warn!(
            lower_bound = lower,
            upper_bound = upper,
            tick_unit,
            limit = MAX_MAJOR_TICKS,
            "refusing to create more than the major tick limit on a temporal axis"
        );
    } else {
        ticks.reserve(usize::try_from(projected).unwrap_or(0) + 1);
        let mut major = lower;
        while major < upper {
            ticks.push(major);
            match major.checked_add(tick_unit) {
                Some(next) => major = next,
                None => break,
            }
        }
    }
    ticks.push(upper);
    ticks
}

/// Coordinates of minor ticks between consecutive majors, ascending.
///
/// Each major interval `[major, min(major + tick_unit, upper))` is split into
/// `minor_count_per_major` parts; positions truncate to whole coordinates and
/// never repeat a major tick or the previous minor tick.
#[must_use]
pub fn minor_ticks(
    lower_bound: i64,
    upper_bound: i64,
    tick_unit: i64,
    minor_count_per_major: u32,
) -> Vec<i64> {
    if tick_unit <= 0 || lower_bound >= upper_bound {
        return Vec::new();
    }

    let minor_unit = tick_unit as f64 / f64::from(minor_count_per_major.max(1));
    let span = upper_bound as f64 - lower_bound as f64;
    if span / minor_unit > MAX_MINOR_TICKS {
        warn!(
            lower_bound,
            upper_bound,
            tick_unit,
            limit = MAX_MINOR_TICKS,
            "refusing to create more than the minor tick limit on a temporal axis"
        );
        return Vec::new();
    }

    let mut minors = Vec::new();
    let mut major = lower_bound;
    while major < upper_bound {
        let next = major.saturating_add(tick_unit).min(upper_bound);
        let mut step = 1u32;
        loop {
            let minor = major as f64 + minor_unit * f64::from(step);
            if minor >= next as f64 {
                break;
            }
            let coordinate = minor as i64;
            if coordinate != major && coordinate < next && minors.last() != Some(&coordinate) {
                minors.push(coordinate);
            }
            step += 1;
        }
        if next == upper_bound {
            break;
        }
        major = next;
    }
    minors
}
