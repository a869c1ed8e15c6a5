use std::sync::Arc;

use approx::assert_relative_eq;
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use temporal_axis::api::{AxisInvalidation, AxisLayout};
use temporal_axis::core::HeuristicLabelMeasurer;
use temporal_axis::{AxisOrientation, DateTimeAxis, TemporalUnit};

fn base() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2015, 8, 15)
        .and_then(|d| d.and_hms_opt(18, 23, 1))
        .expect("valid base")
}

/// Minutes 0..=20 with a tick every 2 minutes and 19 px wide, 10 px tall labels.
fn dense_axis() -> DateTimeAxis {
    let mut axis = DateTimeAxis::with_bounds(
        base(),
        base() + TimeDelta::minutes(20),
        2,
        TemporalUnit::Minutes,
    )
    .expect("axis");
    axis.set_label_measurer(Arc::new(HeuristicLabelMeasurer::new(1.0, 10.0)));
    axis
}

fn visible_coordinates(layout: &AxisLayout) -> Vec<i64> {
    layout.visible_labels().map(|tick| tick.coordinate).collect()
}

#[test]
fn horizontal_layout_hides_overlapping_labels() {
    let mut axis = dense_axis();
    let layout = axis.layout(100.0).expect("layout");

    assert_eq!(layout.ticks.len(), 11);
    assert_relative_eq!(layout.ticks[1].position, 10.0);
    assert_relative_eq!(layout.ticks[1].extent.width, 19.0);
    assert_eq!(visible_coordinates(&layout), vec![0, 6, 12, 18]);
    assert_eq!(layout.ticks[3].label, "2015-08-15T18:29:01");
}

#[test]
fn inverted_layout_walks_labels_from_the_track_end() {
    let mut axis = dense_axis();
    axis.invert();
    let layout = axis.layout(100.0).expect("layout");

    assert_relative_eq!(layout.ticks[0].position, 100.0);
    assert_relative_eq!(layout.ticks[10].position, 0.0);
    assert_eq!(visible_coordinates(&layout), vec![0, 6, 12, 18]);
}

#[test]
fn vertical_layout_measures_label_height() {
    let mut axis = dense_axis();
    axis.set_orientation(AxisOrientation::Vertical);
    let layout = axis.layout(100.0).expect("layout");

    assert_relative_eq!(layout.range.scale, -5.0);
    assert_relative_eq!(layout.ticks[0].position, 100.0);
    assert_eq!(visible_coordinates(&layout), vec![0, 4, 8, 12, 16, 20]);
}

#[test]
fn rotated_labels_use_their_rotated_extent() {
    let mut axis = dense_axis();
    axis.set_tick_label_rotation(90.0).expect("rotation");
    let layout = axis.layout(100.0).expect("layout");

    assert_relative_eq!(layout.ticks[0].extent.width, 10.0, epsilon = 1e-9);
    assert_eq!(visible_coordinates(&layout), vec![0, 4, 8, 12, 16, 20]);
}

#[test]
fn minor_positions_fall_between_majors() {
    let mut axis = dense_axis();
    axis.set_minor_tick_count(2);
    let layout = axis.layout(100.0).expect("layout");

    let expected: Vec<f64> = (0..10).map(|i| 5.0 + 10.0 * f64::from(i)).collect();
    assert_eq!(layout.minor_positions.len(), expected.len());
    for (actual, expected) in layout.minor_positions.iter().zip(expected) {
        assert_relative_eq!(*actual, expected);
    }
}

#[test]
fn layout_clears_pending_invalidation() {
    let mut axis = dense_axis();
    assert_eq!(axis.pending_invalidation(), AxisInvalidation::Range);
    axis.layout(100.0).expect("layout");
    assert_eq!(axis.pending_invalidation(), AxisInvalidation::None);
    assert!(axis.is_range_valid());
}

#[test]
fn layout_rejects_non_positive_length() {
    let mut axis = dense_axis();
    assert!(axis.layout(0.0).is_err());
    assert!(axis.layout(f64::NAN).is_err());
}
