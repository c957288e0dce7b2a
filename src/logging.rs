//! Logging setup for the command-line binary
//!
//! The library core never logs; only the command layer emits `tracing`
//! events. Output goes to stderr so result lists on stdout stay clean.

use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

static INIT: OnceLock<()> = OnceLock::new();

/// Install the global subscriber
///
/// Defaults to `word_finder=info`, or `word_finder=debug` when `verbose` is
/// set. `RUST_LOG` overrides both. Safe to call more than once; only the
/// first call has effect.
pub fn init(verbose: bool) {
    INIT.get_or_init(|| {
        let default = if verbose {
            "word_finder=debug"
        } else {
            "word_finder=info"
        };

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .try_init();
    });
}
