//! Opt-in tracing setup for hosts embedding `temporal-axis`.
//!
//! The axis reports tick guard trips with `warn!`, range changes with
//! `debug!` and auto-range iterations with `trace!`. Hosts with their own
//! subscriber need nothing from this module.

/// Filter used when `RUST_LOG` is unset: guard warnings only.
pub const DEFAULT_FILTER: &str = "temporal_axis=warn";

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`, or by
/// [`DEFAULT_FILTER`] when the variable is unset.
///
/// Returns `false` when the `telemetry` feature is off or a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing(DEFAULT_FILTER)
}

/// Like [`init_default_tracing`] with an explicit fallback filter, e.g.
/// `"temporal_axis=trace"` to follow auto-range iterations.
#[must_use]
pub fn init_tracing(fallback_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_filter));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_filter;
        false
    }
}
