//! Log subscriber setup.

use tracing_subscriber::{EnvFilter, fmt};

/// Variable checked before `RUST_LOG`.
const LOG_ENV: &str = "GX_LOG";

fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the global subscriber.
///
/// `GX_LOG` wins, then `RUST_LOG`, then the level implied by `-v`.
/// Output goes to stderr so that `--json` stays clean.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .try_init();
}
