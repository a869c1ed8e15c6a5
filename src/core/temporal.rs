use std::fmt;

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::core::label_format::{IsoDateFormatter, IsoDateTimeFormatter, TickLabelFormatter};
use crate::error::{AxisError, AxisResult};

/// Step unit used to discretize temporal values into axis coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemporalUnit {
    Nanoseconds,
    Microseconds,
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    HalfDays,
    Days,
    Weeks,
    Months,
    Years,
    Decades,
    Centuries,
    Millennia,
}

impl TemporalUnit {
    /// Returns `true` for units measured on the calendar rather than the clock.
    #[must_use]
    pub fn is_date_based(self) -> bool {
        matches!(
            self,
            Self::Days
                | Self::Weeks
                | Self::Months
                | Self::Years
                | Self::Decades
                | Self::Centuries
                | Self::Millennia
        )
    }

    /// Number of calendar months in one unit, for month-based units.
    #[must_use]
    pub fn months_per_unit(self) -> Option<i64> {
        match self {
            Self::Months => Some(1),
            Self::Years => Some(12),
            Self::Decades => Some(120),
            Self::Centuries => Some(1_200),
            Self::Millennia => Some(12_000),
            _ => None,
        }
    }
}

/// Temporal capability consumed by the axis.
///
/// Implementors expose the two operations the coordinate mapper needs:
/// whole-unit distance (truncating toward zero) and advancing by a signed
/// number of units. Each implementor also names its reference label format.
pub trait Temporal: Copy + fmt::Debug + PartialEq + Send + Sync + 'static {
    /// Human-readable kind used in diagnostics.
    const KIND: &'static str;

    type Formatter: TickLabelFormatter<Self> + Default;

    fn distance_in_units(self, end: Self, unit: TemporalUnit) -> AxisResult<i64>;

    fn advance(self, count: i64, unit: TemporalUnit) -> AxisResult<Self>;
}

impl Temporal for NaiveDate {
    const KIND: &'static str = "date";

    type Formatter = IsoDateFormatter;

    fn distance_in_units(self, end: Self, unit: TemporalUnit) -> AxisResult<i64> {
        if !unit.is_date_based() {
            return Err(unsupported::<Self>(unit));
        }
        Ok(date_distance(self, end, unit))
    }

    fn advance(self, count: i64, unit: TemporalUnit) -> AxisResult<Self> {
        if !unit.is_date_based() {
            return Err(unsupported::<Self>(unit));
        }
        if let Some(months) = unit.months_per_unit() {
            let total = count
                .checked_mul(months)
                .ok_or(AxisError::CoordinateOverflow { unit })?;
            return shift_months(total, unit, |m| self.checked_add_months(m), |m| {
                self.checked_sub_months(m)
            });
        }
        time_delta(unit, count)
            .and_then(|delta| self.checked_add_signed(delta))
            .ok_or(AxisError::CoordinateOverflow { unit })
    }
}

impl Temporal for NaiveDateTime {
    const KIND: &'static str = "date-time";

    type Formatter = IsoDateTimeFormatter;

    fn distance_in_units(self, end: Self, unit: TemporalUnit) -> AxisResult<i64> {
        if unit.is_date_based() {
            // A partial trailing day does not count as a whole calendar unit.
            let mut end_date = end.date();
            if end_date > self.date() && end.time() < self.time() {
                end_date = end_date
                    .pred_opt()
                    .ok_or(AxisError::CoordinateOverflow { unit })?;
            } else if end_date < self.date() && end.time() > self.time() {
                end_date = end_date
                    .succ_opt()
                    .ok_or(AxisError::CoordinateOverflow { unit })?;
            }
            return Ok(date_distance(self.date(), end_date, unit));
        }

        let delta = end.signed_duration_since(self);
        let count = match unit {
            TemporalUnit::Nanoseconds => delta.num_nanoseconds(),
            TemporalUnit::Microseconds => delta.num_microseconds(),
            TemporalUnit::Milliseconds => Some(delta.num_milliseconds()),
            TemporalUnit::Seconds => Some(delta.num_seconds()),
            TemporalUnit::Minutes => Some(delta.num_minutes()),
            TemporalUnit::Hours => Some(delta.num_hours()),
            TemporalUnit::HalfDays => Some(delta.num_hours() / 12),
            _ => None,
        };
        count.ok_or(AxisError::CoordinateOverflow { unit })
    }

    fn advance(self, count: i64, unit: TemporalUnit) -> AxisResult<Self> {
        if let Some(months) = unit.months_per_unit() {
            let total = count
                .checked_mul(months)
                .ok_or(AxisError::CoordinateOverflow { unit })?;
            return shift_months(total, unit, |m| self.checked_add_months(m), |m| {
                self.checked_sub_months(m)
            });
        }
        time_delta(unit, count)
            .and_then(|delta| self.checked_add_signed(delta))
            .ok_or(AxisError::CoordinateOverflow { unit })
    }
}

fn unsupported<T: Temporal>(unit: TemporalUnit) -> AxisError {
    AxisError::UnsupportedUnit {
        unit,
        kind: T::KIND,
    }
}

fn date_distance(start: NaiveDate, end: NaiveDate, unit: TemporalUnit) -> i64 {
    if let Some(months) = unit.months_per_unit() {
        return months_between(start, end) / months;
    }
    let days = end.signed_duration_since(start).num_days();
    match unit {
        TemporalUnit::Weeks => days / 7,
        _ => days,
    }
}

/// Whole calendar months from `start` to `end`, truncated toward zero.
fn months_between(start: NaiveDate, end: NaiveDate) -> i64 {
    let packed = |date: NaiveDate| {
        (i64::from(date.year()) * 12 + i64::from(date.month0())) * 32 + i64::from(date.day())
    };
    (packed(end) - packed(start)) / 32
}

fn shift_months<T>(
    total_months: i64,
    unit: TemporalUnit,
    add: impl FnOnce(Months) -> Option<T>,
    sub: impl FnOnce(Months) -> Option<T>,
) -> AxisResult<T> {
    let magnitude =
        u32::try_from(total_months.unsigned_abs()).map_err(|_| AxisError::CoordinateOverflow { unit })?;
    let shifted = if total_months >= 0 {
        add(Months::new(magnitude))
    } else {
        sub(Months::new(magnitude))
    };
    shifted.ok_or(AxisError::CoordinateOverflow { unit })
}

fn time_delta(unit: TemporalUnit, count: i64) -> Option<TimeDelta> {
    match unit {
        TemporalUnit::Nanoseconds => Some(TimeDelta::nanoseconds(count)),
        TemporalUnit::Microseconds => Some(TimeDelta::microseconds(count)),
        TemporalUnit::Milliseconds => TimeDelta::try_milliseconds(count),
        TemporalUnit::Seconds => TimeDelta::try_seconds(count),
        TemporalUnit::Minutes => TimeDelta::try_minutes(count),
        TemporalUnit::Hours => TimeDelta::try_hours(count),
        TemporalUnit::HalfDays => count.checked_mul(12).and_then(TimeDelta::try_hours),
        TemporalUnit::Days => TimeDelta::try_days(count),
        TemporalUnit::Weeks => TimeDelta::try_weeks(count),
        _ => None,
    }
}
