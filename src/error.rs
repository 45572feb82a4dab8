//! Error definitions shared across the router.

use thiserror::Error;

/// Errors raised by the router itself.
///
/// A request that matches no route is not an error; see
/// [`Router::match_request`](crate::routing::Router::match_request).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterError {
    /// Reverse generation was asked for a name that was never registered.
    #[error("No route with the name {0} has been found.")]
    RouteNotFound(String),
}

/// Errors that can occur while resolving a matched route to a handler.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// No handler registered for the target identifier.
    #[error("No handler registered for target {0}")]
    UnknownTarget(String),
}

/// Result type for router operations.
pub type RouterResult<T> = Result<T, RouterError>;
