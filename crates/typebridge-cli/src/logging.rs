//! Tracing subscriber setup.
//!
//! The subscriber is only installed when `TYPEBRIDGE_LOG` (or `RUST_LOG`) is
//! set. Filter values use the `RUST_LOG` syntax, e.g.
//! `TYPEBRIDGE_LOG=typebridge_compiler=trace`.

use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "TYPEBRIDGE_LOG";

/// `TYPEBRIDGE_LOG` takes precedence over `RUST_LOG`.
fn build_filter() -> Option<EnvFilter> {
    if let Ok(val) = std::env::var(LOG_ENV) {
        return Some(EnvFilter::builder().parse_lossy(val));
    }
    std::env::var("RUST_LOG")
        .ok()
        .map(|_| EnvFilter::from_default_env())
}

/// Install the global fmt subscriber, writing to stderr.
///
/// The output file is never stdout, but generated text and logs still stay
/// on separate streams.
pub fn init_tracing() {
    let Some(filter) = build_filter() else {
        return;
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
