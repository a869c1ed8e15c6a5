use serde::{Deserialize, Serialize};

use crate::core::temporal::{Temporal, TemporalUnit};
use crate::error::AxisResult;

/// Whole `unit`s from `base` to `value`, truncated toward zero.
pub fn to_coordinate<T: Temporal>(base: T, unit: TemporalUnit, value: T) -> AxisResult<i64> {
    base.distance_in_units(value, unit)
}

/// `base` advanced by `coordinate` units.
pub fn to_temporal<T: Temporal>(base: T, unit: TemporalUnit, coordinate: i64) -> AxisResult<T> {
    base.advance(coordinate, unit)
}

/// Fixed base point and unit shared by every coordinate on one axis.
///
/// Values that are not a whole number of units away from `base` are
/// truncated onto the unit grid by `to_coordinate`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateMapper<T> {
    base: T,
    unit: TemporalUnit,
}

impl<T: Temporal> CoordinateMapper<T> {
    #[must_use]
    pub fn new(base: T, unit: TemporalUnit) -> Self {
        Self { base, unit }
    }

    #[must_use]
    pub fn base(&self) -> T {
        self.base
    }

    #[must_use]
    pub fn unit(&self) -> TemporalUnit {
        self.unit
    }

    pub fn to_coordinate(&self, value: T) -> AxisResult<i64> {
        to_coordinate(self.base, self.unit, value)
    }

    pub fn to_temporal(&self, coordinate: i64) -> AxisResult<T> {
        to_temporal(self.base, self.unit, coordinate)
    }

    /// Snaps `value` onto the unit grid anchored at `base`.
    pub fn truncate_to_grid(&self, value: T) -> AxisResult<T> {
        self.to_temporal(self.to_coordinate(value)?)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::CoordinateMapper;
    use crate::core::TemporalUnit;

    #[test]
    fn off_grid_value_truncates_onto_unit_grid() {
        let base = NaiveDate::from_ymd_opt(2015, 8, 15)
            .and_then(|d| d.and_hms_opt(18, 23, 1))
            .expect("valid base");
        let mapper = CoordinateMapper::new(base, TemporalUnit::Minutes);
        let off_grid = NaiveDate::from_ymd_opt(2015, 8, 15)
            .and_then(|d| d.and_hms_opt(18, 30, 45))
            .expect("valid value");

        assert_eq!(mapper.to_coordinate(off_grid).expect("coordinate"), 7);
        let snapped = mapper.truncate_to_grid(off_grid).expect("snap");
        assert_eq!(
            snapped,
            NaiveDate::from_ymd_opt(2015, 8, 15)
                .and_then(|d| d.and_hms_opt(18, 30, 1))
                .expect("valid snapped")
        );
    }
}
