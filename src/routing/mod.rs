//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request (method, path)
//!     → router.rs (ordered route scan)
//!     → matcher.rs (method + anchored path pattern)
//!     → route.rs (placeholder names, parameter binding)
//!     → Return: MatchResult or None
//!
//! Route Compilation (at startup / on reload):
//!     RouteConfig[]
//!     → Route (template, methods, filters, presets)
//!     → RouteCollection (insertion order = priority)
//!     → Router (name index, compiled patterns)
//!     → SharedRouter swap (shared.rs)
//! ```
//!
//! # Design Decisions
//! - Routes compiled once per router, immutable at runtime
//! - Deterministic: same input always matches same route
//! - First match wins (registration order), no specificity scoring

pub mod collection;
pub mod matcher;
pub mod route;
pub mod router;
pub mod shared;

pub use collection::RouteCollection;
pub use route::{Params, Route};
pub use router::{MatchResult, Router};
pub use shared::SharedRouter;
