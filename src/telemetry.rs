//! Log output for hosts embedding the chart.
//!
//! The engine emits `tracing` events under the `trend_chart` target: `debug`
//! for data, config and resize changes, `trace` for pointer transitions and
//! selection moves, `warn` for dropped samples and sanitized sizes. Hosts that
//! already run a subscriber get these for free; the rest can call
//! `init_default_tracing` with the `telemetry` feature enabled.

/// Default filter when `RUST_LOG` is unset: chart warnings and lifecycle
/// events, without the per-drag selection trace.
pub const DEFAULT_LOG_FILTER: &str = "trend_chart=info";

/// Installs a compact `tracing-subscriber` formatter filtered by `RUST_LOG`,
/// or `DEFAULT_LOG_FILTER` when it is unset.
///
/// Returns `false` without the `telemetry` feature, or when the host already
/// installed a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
