use chart_table::telemetry::{
    DEFAULT_TRACING_DIRECTIVES, init_default_tracing, init_tracing_with_directives,
};

#[test]
fn default_directives_target_this_crate() {
    assert!(DEFAULT_TRACING_DIRECTIVES.starts_with("chart_table"));
}

#[cfg(not(feature = "telemetry"))]
#[test]
fn tracing_setup_is_a_no_op_without_feature() {
    assert!(!init_default_tracing());
    assert!(!init_tracing_with_directives("chart_table=trace"));
}

#[cfg(feature = "telemetry")]
#[test]
fn tracing_installs_only_once() {
    assert!(init_tracing_with_directives("chart_table::resolve=trace"));
    assert!(!init_default_tracing());
}
