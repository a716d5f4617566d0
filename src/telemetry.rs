//! Opt-in tracing setup for hosts that do not install their own subscriber.
//!
//! Resolver and painter spans log under the `chart_table` target, so hosts can
//! raise table logging without touching their own filters.

/// Filter used when `RUST_LOG` is unset: warnings from table resolution only.
pub const DEFAULT_TRACING_DIRECTIVES: &str = "chart_table=warn";

/// Installs a compact fmt subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_TRACING_DIRECTIVES`].
///
/// Returns `false` without the `telemetry` feature or when a global
/// subscriber is already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_directives(DEFAULT_TRACING_DIRECTIVES)
}

/// Like [`init_default_tracing`] with caller-chosen fallback directives,
/// e.g. `"chart_table::resolve=trace"` to see skipped ragged slots.
#[must_use]
pub fn init_tracing_with_directives(fallback: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(fallback))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACING_DIRECTIVES));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback;
        false
    }
}
