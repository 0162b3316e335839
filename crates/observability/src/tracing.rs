//! Subscriber setup for the httpresults binaries.
//!
//! Output is one JSON object per event. Result types emit at `debug`; raise
//! `RUST_LOG` (for example `httpresults_results=debug`) to see every executed
//! response.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Directive used when `RUST_LOG` is unset or does not parse.
pub const DEFAULT_FILTER: &str = "info";

/// Filter from `RUST_LOG`, else [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. A second call leaves the first in place.
pub fn init() {
    let json = fmt::layer()
        .json()
        .with_current_span(false)
        .with_target(true);

    if tracing_subscriber::registry()
        .with(env_filter())
        .with(json)
        .try_init()
        .is_err()
    {
        ::tracing::debug!("subscriber already installed");
    }
}
