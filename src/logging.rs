//! Logging initialization
//!
//! Logs go to stderr so stdout only ever carries query results. `--debug`
//! raises the default level to `debug`; `RUST_LOG` overrides either default.

use tracing_subscriber::EnvFilter;

/// Default filter when `--debug` is not given
const QUIET_FILTER: &str = "warn";

/// Default filter with `--debug`
const DEBUG_FILTER: &str = "jqurl=debug,warn";

/// Filter used when `RUST_LOG` is unset or invalid
pub fn default_filter(debug: bool) -> &'static str {
    if debug {
        DEBUG_FILTER
    } else {
        QUIET_FILTER
    }
}

/// Installs the global stderr subscriber. Safe to call once per process.
pub fn init(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(debug)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
