//! Handler dispatch subsystem.
//!
//! # Data Flow
//! ```text
//! MatchResult (route + bound params)
//!     → target.rs (parse "Module::action", choose positional/named args)
//!     → registry.rs (look up handler closure)
//!     → handler output
//! ```
//!
//! # Design Decisions
//! - Targets stay opaque strings inside the routing core
//! - Handlers are registered once at startup; no runtime instantiation by name

pub mod registry;
pub mod target;

pub use registry::{Handler, HandlerRegistry};
pub use target::{Arguments, Invocation, Target};
