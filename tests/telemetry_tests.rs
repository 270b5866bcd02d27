use zoomline::telemetry::init_default_tracing;

#[cfg(not(feature = "telemetry"))]
#[test]
fn init_is_noop_without_feature() {
    assert!(!init_default_tracing());
}

#[cfg(feature = "telemetry")]
#[test]
fn init_succeeds_once() {
    assert!(init_default_tracing());
    assert!(!init_default_tracing());
}
