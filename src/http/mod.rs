//! Request-side types consumed by the router.
//!
//! # Data Flow
//! ```text
//! Host server request (method, URI, form fields)
//!     → request.rs (RequestContext: override method, strip query/mount)
//!     → routing::Router::match_request
//! ```

pub mod request;

pub use request::RequestContext;
