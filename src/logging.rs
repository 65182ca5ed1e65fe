// src/logging.rs
// =============================================================================
// Diagnostic logging setup.
//
// Standard output is reserved for search results, so tracing writes to
// standard error. RUST_LOG always wins; otherwise we log warnings only, or
// debug output for our own crate when --verbose is passed.
// =============================================================================

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init_logging(verbose: bool) {
    let default_filter = if verbose { "warn,getme=debug" } else { "warn" };

    // try_init so a second call (e.g. from tests) is harmless
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
