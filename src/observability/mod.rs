//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Router, loader and watcher produce:
//!     → logging.rs (structured tracing events)
//!     → metrics.rs (counters)
//! ```
//!
//! # Design Decisions
//! - Structured fields (method, path, template) rather than formatted text
//! - Routine misses log at trace; a miss is not a failure

pub mod logging;
pub mod metrics;
