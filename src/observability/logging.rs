//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber for binaries embedding the router
//! - Honour `RUST_LOG`, falling back to a caller-supplied directive
//!
//! The library itself only emits `tracing` events; installing a subscriber
//! is left to the host.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default directive when `RUST_LOG` is not set.
pub const DEFAULT_DIRECTIVE: &str = "path_router=info";

/// Install a global fmt subscriber. Returns an error if one is already set.
pub fn init_logging(default_directive: &str) -> Result<(), tracing_subscriber::util::TryInitError> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
}
