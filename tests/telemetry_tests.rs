use trend_chart::telemetry::{DEFAULT_LOG_FILTER, init_default_tracing};

#[test]
fn default_filter_targets_crate() {
    assert!(DEFAULT_LOG_FILTER.starts_with("trend_chart="));
}

#[cfg(not(feature = "telemetry"))]
#[test]
fn tracing_init_is_noop_without_feature() {
    assert!(!init_default_tracing());
}

#[cfg(feature = "telemetry")]
#[test]
fn tracing_init_succeeds_once() {
    let first = init_default_tracing();
    let second = init_default_tracing();
    assert!(first);
    assert!(!second);
}
