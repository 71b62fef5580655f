use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{DEFAULT_LOG_DIRECTIVE, LOG_FILTER_ENV};

/// Returns the filter plus the raw directive when it failed to parse.
fn build_env_filter(raw_filter: Option<&str>) -> (EnvFilter, Option<String>) {
    let Some(value) = raw_filter.map(str::trim).filter(|value| !value.is_empty()) else {
        return (EnvFilter::new(DEFAULT_LOG_DIRECTIVE), None);
    };

    match EnvFilter::try_new(value) {
        Ok(filter) => (filter, None),
        Err(_) => (EnvFilter::new(DEFAULT_LOG_DIRECTIVE), Some(value.to_string())),
    }
}

/// Installs the global subscriber. Safe to call more than once; later calls are ignored.
pub(crate) fn init_logging() {
    let raw_filter = std::env::var(LOG_FILTER_ENV).ok();
    let (filter, rejected) = build_env_filter(raw_filter.as_deref());

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .try_init();

    if let Some(rejected) = rejected {
        tracing::warn!(
            env = LOG_FILTER_ENV,
            directive = %rejected,
            fallback = DEFAULT_LOG_DIRECTIVE,
            "invalid log filter, using default"
        );
    }
}
