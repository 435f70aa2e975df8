//! Tracing setup for binaries and demos embedding trueno-parcoords.
//!
//! The library only emits `tracing` events; installing a subscriber is
//! left to the application. `init_default_tracing` is a convenience for
//! callers that have no subscriber of their own.

use tracing_subscriber::EnvFilter;

/// Install a compact `fmt` subscriber filtered by `RUST_LOG` (default `info`).
///
/// Returns `false` if a global subscriber was already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}
