use approx::assert_relative_eq;
use chrono::NaiveDate;
use temporal_axis::{AxisError, AxisRange, DateAxis, TemporalUnit};

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

#[test]
fn day_axis_counts_calendar_days() {
    let axis = DateAxis::with_bounds(day(2015, 8, 1), day(2015, 8, 31), 7, TemporalUnit::Days)
        .expect("axis");
    assert_eq!(axis.upper_bound(), 30);
    assert_eq!(axis.tick_unit(), 7);
    assert_eq!(
        axis.calculate_tick_values(300.0, &axis.range()),
        vec![0, 7, 14, 21, 28, 30]
    );
    assert_eq!(
        axis.tick_mark_label_for_coordinate(14).expect("label"),
        "2015-08-15"
    );
}

#[test]
fn month_axis_steps_by_calendar_month() {
    let mut axis =
        DateAxis::with_bounds(day(2015, 1, 1), day(2016, 1, 1), 3, TemporalUnit::Months)
            .expect("axis");
    axis.calculate_new_scale(240.0).expect("scale");
    assert_eq!(axis.range(), AxisRange::new(0, 12, 3, 20.0));

    let layout = axis.layout(240.0).expect("layout");
    let labels: Vec<&str> = layout.ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["2015-01-01", "2015-04-01", "2015-07-01", "2015-10-01", "2016-01-01"]
    );
    assert_relative_eq!(layout.ticks[2].position, 120.0);
}

#[test]
fn date_axis_parses_iso_dates() {
    let axis = DateAxis::new(day(2015, 8, 15), TemporalUnit::Weeks);
    assert_eq!(axis.parse("2015-08-29").expect("parse"), 2);
    assert_eq!(axis.parse("2015-08-21").expect("parse"), 0);
    assert_eq!(axis.parse("2015-08-08").expect("parse"), -1);
    assert!(matches!(
        axis.parse("2015-13-40"),
        Err(AxisError::LabelParse { .. })
    ));
}

#[test]
fn date_axis_rejects_clock_units() {
    let axis = DateAxis::new(day(2015, 8, 15), TemporalUnit::Hours);
    assert!(matches!(
        axis.to_temporal(1),
        Err(AxisError::UnsupportedUnit { kind: "date", .. })
    ));
}

#[test]
fn invalidate_range_records_extent_of_unsorted_data() {
    let mut axis = DateAxis::new(day(2015, 8, 15), TemporalUnit::Days);
    axis.invalidate_range(&[12, -3, 40, 7]);
    assert_eq!(axis.data_extent(), Some((-3, 40)));

    axis.invalidate_range(&[]);
    assert_eq!(axis.data_extent(), None);
    assert_eq!(axis.refresh_range(500.0).expect("refresh"), None);
}

#[test]
fn fixed_range_axis_ignores_refresh() {
    let mut axis = DateAxis::with_bounds(day(2015, 8, 1), day(2015, 8, 31), 7, TemporalUnit::Days)
        .expect("axis");
    axis.invalidate_range(&[0, 100]);
    assert_eq!(axis.refresh_range(500.0).expect("refresh"), None);
    assert_eq!(axis.upper_bound(), 30);
}
