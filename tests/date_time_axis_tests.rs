use approx::assert_relative_eq;
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use temporal_axis::{AxisOrientation, AxisRange, DateTimeAxis, TemporalUnit};

fn lower() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2015, 8, 15)
        .and_then(|d| d.and_hms_opt(18, 23, 1))
        .expect("valid lower bound")
}

fn upper() -> NaiveDateTime {
    lower() + TimeDelta::minutes(20)
}

fn minute_axis() -> DateTimeAxis {
    let mut axis =
        DateTimeAxis::with_bounds(lower(), upper(), 10, TemporalUnit::Minutes).expect("axis");
    axis.calculate_new_scale(100.0).expect("scale");
    axis
}

#[test]
fn fixed_bounds_axis_starts_at_coordinate_zero() {
    let axis = minute_axis();
    assert!(!axis.is_auto_ranging());
    assert_eq!(axis.range(), AxisRange::new(0, 20, 10, 5.0));
    assert_eq!(axis.to_coordinate(lower()).expect("coordinate"), 0);
    assert_eq!(axis.to_coordinate(upper()).expect("coordinate"), 20);
}

#[test]
fn display_position_maps_coordinates_linearly() {
    let axis = minute_axis();
    assert_relative_eq!(axis.display_position(0), 0.0);
    assert_relative_eq!(axis.display_position(5), 25.0);
    assert_relative_eq!(axis.display_position(20), 100.0);
    assert_relative_eq!(
        axis.display_position_of(lower() + TimeDelta::minutes(5))
            .expect("position"),
        25.0
    );
}

#[test]
fn value_for_display_inverts_display_position() {
    let axis = minute_axis();
    assert_eq!(axis.value_for_display(75.0), 15);
    assert_eq!(
        axis.to_temporal(axis.value_for_display(75.0)).expect("temporal"),
        lower() + TimeDelta::minutes(15)
    );
}

#[test]
fn inverted_horizontal_axis_runs_right_to_left() {
    let mut axis = minute_axis();
    axis.invert();
    assert!(axis.is_inverted());
    assert_relative_eq!(axis.display_position(0), 100.0);
    assert_relative_eq!(axis.display_position(1), 95.0);
    assert_relative_eq!(axis.display_position(20), 0.0);
}

#[test]
fn vertical_axis_places_lower_bound_at_the_bottom() {
    let mut axis = minute_axis();
    axis.set_orientation(AxisOrientation::Vertical);
    axis.calculate_new_scale(100.0).expect("scale");
    assert_relative_eq!(axis.scale(), -5.0);
    assert_relative_eq!(axis.display_position(0), 100.0);

    axis.set_inverted(true);
    assert_relative_eq!(axis.display_position(0), 0.0);
}

#[test]
fn zero_position_is_nan_when_base_is_off_axis() {
    let mut axis = minute_axis();
    axis.set_range(AxisRange::new(-40, 40, 5, 1.2), false);
    assert_relative_eq!(axis.zero_position(), 48.0);

    axis.set_range(AxisRange::new(1, 40, 5, 1.2), false);
    assert!(axis.zero_position().is_nan());
}

#[test]
fn value_on_axis_checks_inclusive_bounds() {
    let axis = minute_axis();
    assert!(axis.is_value_on_axis(0));
    assert!(axis.is_value_on_axis(20));
    assert!(!axis.is_value_on_axis(-1));
    assert!(!axis.is_value_on_axis(21));
    assert_relative_eq!(axis.to_numeric_value(17), 17.0);
}

#[test]
fn labels_use_iso_local_date_time() {
    let axis = minute_axis();
    assert_eq!(axis.tick_mark_label(&lower()), "2015-08-15T18:23:01");
    assert_eq!(
        axis.tick_mark_label_for_coordinate(20).expect("label"),
        "2015-08-15T18:43:01"
    );
    assert_eq!(axis.parse("2015-08-15T18:23:01").expect("parse"), 0);
    assert_eq!(axis.parse("2015-08-15T18:33:01").expect("parse"), 10);
    assert!(axis.parse("yesterday").is_err());
}

#[test]
fn tick_values_include_both_bounds() {
    let axis = minute_axis();
    assert_eq!(axis.calculate_tick_values(100.0, &axis.range()), vec![0, 10, 20]);
    assert_eq!(axis.calculate_minor_tick_marks(), vec![2, 4, 6, 8, 12, 14, 16, 18]);
}

#[test]
fn auto_ranging_axis_recomputes_from_recorded_values() {
    let mut axis = DateTimeAxis::new(lower(), TemporalUnit::Minutes);
    let values: Vec<NaiveDateTime> = (0..=6)
        .map(|step| lower() + TimeDelta::minutes(step * 10))
        .collect();
    axis.invalidate_range_with_values(&values)
        .expect("record values");
    assert_eq!(axis.data_extent(), Some((0, 60)));
    assert!(!axis.is_range_valid());

    let layout = axis.layout(800.0).expect("layout");
    assert!(axis.is_range_valid());
    let range = layout.range;
    assert!(range.lower_bound < 0);
    assert!(range.upper_bound > 60);
    assert!(range.tick_unit > 0);
    assert_eq!(range.lower_bound.rem_euclid(range.tick_unit), 0);
    assert_eq!(range.upper_bound.rem_euclid(range.tick_unit), 0);
    assert_eq!(layout.ticks.last().map(|t| t.coordinate), Some(range.upper_bound));
    assert!(layout.visible_labels().count() >= 2);
}

#[test]
fn narrow_track_still_lays_out_the_minimal_range() {
    let mut axis = DateTimeAxis::new(lower(), TemporalUnit::Minutes);
    axis.invalidate_range(&[-49, 55]);

    let layout = axis.layout(200.0).expect("layout");
    assert_eq!(layout.range, AxisRange::new(-56, 56, 56, 200.0 / 112.0));
    let coordinates: Vec<i64> = layout.ticks.iter().map(|t| t.coordinate).collect();
    assert_eq!(coordinates, vec![-56, 0, 56]);
    assert_eq!(
        layout.visible_labels().map(|t| t.coordinate).collect::<Vec<_>>(),
        vec![-56, 56]
    );
}
