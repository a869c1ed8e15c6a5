//! temporal-axis: date and date-time chart axis core.
//!
//! Temporal values are discretized into integer coordinates (whole units from
//! a fixed base). Ranges, tick marks and pixel positions are computed over
//! those coordinates, so the auto-ranging and tick algorithms stay
//! independent of the temporal kind.
//!
//! `core` holds the pure numeric functions; `api` wraps them in a stateful
//! [`TemporalAxis`] for host layout passes.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{AxisConfig, DateAxis, DateTimeAxis, TemporalAxis};
pub use core::{AxisOrientation, AxisRange, Temporal, TemporalUnit};
pub use error::{AxisError, AxisResult};
