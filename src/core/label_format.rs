use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{AxisError, AxisResult};

pub const ISO_DATE_PATTERN: &str = "%Y-%m-%d";
pub const ISO_DATE_TIME_PATTERN: &str = "%Y-%m-%dT%H:%M:%S%.f";
const ISO_DATE_TIME_MINUTE_PATTERN: &str = "%Y-%m-%dT%H:%M";

/// Symmetric tick label conversion for one temporal kind.
///
/// `parse(format(v))` must return `v` for every value the formatter can
/// represent exactly.
pub trait TickLabelFormatter<T>: fmt::Debug + Send + Sync {
    fn format(&self, value: &T) -> String;

    fn parse(&self, text: &str) -> AxisResult<T>;
}

/// ISO-8601 calendar date, e.g. `2015-08-15`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IsoDateFormatter;

impl TickLabelFormatter<NaiveDate> for IsoDateFormatter {
    fn format(&self, value: &NaiveDate) -> String {
        value.format(ISO_DATE_PATTERN).to_string()
    }

    fn parse(&self, text: &str) -> AxisResult<NaiveDate> {
        NaiveDate::parse_from_str(text.trim(), ISO_DATE_PATTERN).map_err(|source| {
            AxisError::LabelParse {
                input: text.to_owned(),
                source,
            }
        })
    }
}

/// ISO-8601 local date-time, e.g. `2015-08-15T18:23:01`.
///
/// Seconds are always printed; the fraction only when non-zero. Parsing also
/// accepts the minute-precision form `2015-08-15T18:23`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IsoDateTimeFormatter;

impl TickLabelFormatter<NaiveDateTime> for IsoDateTimeFormatter {
    fn format(&self, value: &NaiveDateTime) -> String {
        value.format(ISO_DATE_TIME_PATTERN).to_string()
    }

    fn parse(&self, text: &str) -> AxisResult<NaiveDateTime> {
        let text = text.trim();
        NaiveDateTime::parse_from_str(text, ISO_DATE_TIME_PATTERN)
            .or_else(|full_err| {
                NaiveDateTime::parse_from_str(text, ISO_DATE_TIME_MINUTE_PATTERN)
                    .map_err(|_| full_err)
            })
            .map_err(|source| AxisError::LabelParse {
                input: text.to_owned(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{IsoDateFormatter, IsoDateTimeFormatter, TickLabelFormatter};
    use crate::error::AxisError;

    #[test]
    fn date_time_label_always_prints_seconds() {
        let value = NaiveDate::from_ymd_opt(2015, 8, 15)
            .and_then(|d| d.and_hms_opt(18, 23, 0))
            .expect("valid date-time");
        assert_eq!(IsoDateTimeFormatter.format(&value), "2015-08-15T18:23:00");
    }

    #[test]
    fn date_time_label_keeps_sub_second_precision() {
        let value = NaiveDate::from_ymd_opt(2015, 8, 15)
            .and_then(|d| d.and_hms_milli_opt(18, 23, 1, 250))
            .expect("valid date-time");
        let text = IsoDateTimeFormatter.format(&value);
        assert_eq!(text, "2015-08-15T18:23:01.250");
        assert_eq!(IsoDateTimeFormatter.parse(&text).expect("parse"), value);
    }

    #[test]
    fn date_time_parser_accepts_minute_precision() {
        let parsed = IsoDateTimeFormatter
            .parse("2015-08-15T18:23")
            .expect("parse minute precision");
        assert_eq!(IsoDateTimeFormatter.format(&parsed), "2015-08-15T18:23:00");
    }

    #[test]
    fn date_parse_failure_carries_input() {
        let err = IsoDateFormatter
            .parse("15/08/2015")
            .expect_err("non-iso input must fail");
        match err {
            AxisError::LabelParse { input, .. } => assert_eq!(input, "15/08/2015"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
