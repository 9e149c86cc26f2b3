//! Tracing setup for the `lox-scan` binary.
//!
//! The subscriber is only installed when `LOX_LOG` (or `RUST_LOG`) is set.
//! `LOX_LOG` wins when both are present and uses the same directive syntax,
//! e.g. `LOX_LOG=lox_scan::scanner=trace`.

use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "LOX_LOG";

fn build_filter() -> EnvFilter {
    match std::env::var(LOG_ENV) {
        Ok(directives) => EnvFilter::builder().parse_lossy(directives),
        Err(_) => EnvFilter::from_default_env(),
    }
}

/// Install the global subscriber. Output goes to stderr so token dumps on
/// stdout stay clean.
pub fn init_tracing() {
    let requested = std::env::var_os(LOG_ENV).is_some() || std::env::var_os("RUST_LOG").is_some();
    if !requested {
        return;
    }

    // A subscriber may already be installed when embedded; keep that one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter())
        .with_writer(std::io::stderr)
        .try_init();
}
