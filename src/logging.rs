//! Diagnostic logging setup.
//!
//! Reports go to stdout; tracing output goes to stderr so the two never mix.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT_ONCE: Once = Once::new();

/// Default filter directive for the given verbosity.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "depdiff=debug"
    } else {
        "depdiff=warn"
    }
}

/// Install the stderr subscriber. `RUST_LOG` takes precedence over `verbose`.
///
/// Only the first call has an effect.
pub fn init(verbose: bool) {
    INIT_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
        // Another subscriber may already be installed when embedded as a library.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .without_time()
            .with_target(false)
            .try_init();
    });
}
