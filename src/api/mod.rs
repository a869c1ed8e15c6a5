//! Stateful axis facade consumed by host layout code.

mod axis;
mod axis_config;
mod axis_layout;
mod axis_snapshot;
mod coordinate_controller;
mod invalidation;
mod json_contract;
mod label_cache;
mod layout_controller;
mod range_controller;
mod snapshot_controller;

use chrono::{NaiveDate, NaiveDateTime};

pub use axis::TemporalAxis;
pub use axis_config::AxisConfig;
pub use axis_layout::{AxisLayout, TickMark};
pub use axis_snapshot::AxisSnapshot;
pub use invalidation::{AxisInvalidation, RelayoutCallback};
pub use json_contract::{AXIS_SNAPSHOT_JSON_SCHEMA_V1, AxisSnapshotJsonContractV1};
pub use label_cache::{LabelCacheStats, TickLabelFormatterRef};

/// Axis over calendar dates, labelled `2015-08-15`.
pub type DateAxis = TemporalAxis<NaiveDate>;

/// Axis over local date-times, labelled `2015-08-15T18:23:01`.
pub type DateTimeAxis = TemporalAxis<NaiveDateTime>;
