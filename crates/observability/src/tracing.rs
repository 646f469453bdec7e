//! JSON tracing subscriber for the base items service.

use tracing_subscriber::fmt::time::SystemTime;
use tracing_subscriber::EnvFilter;

/// Filter used when neither `RUST_LOG` nor the service config supply one.
pub const DEFAULT_FILTER: &str = "info";

/// Install the subscriber with [`DEFAULT_FILTER`] as the fallback filter.
pub fn init() -> bool {
    init_with_default(DEFAULT_FILTER)
}

/// Install the process-wide JSON subscriber.
///
/// `RUST_LOG` takes precedence over `default_filter`. Returns `true` if this
/// call installed the subscriber and `false` if one was already installed.
pub fn init_with_default(default_filter: &str) -> bool {
    let directives = filter_directives(std::env::var(EnvFilter::DEFAULT_ENV).ok(), default_filter);
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(SystemTime)
        .with_target(false)
        .try_init()
        .is_ok()
}

fn filter_directives(from_env: Option<String>, default_filter: &str) -> String {
    match from_env {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => default_filter.to_string(),
    }
}
