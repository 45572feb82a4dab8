//! URL routing and dispatch library.
//!
//! Maps a request (method + path) to the first matching registered route,
//! binds its `:name` placeholders, and generates URLs back from route names.
//!
//! ```
//! use path_router::{RequestContext, Route, RouteCollection, Router};
//!
//! let mut routes = RouteCollection::new();
//! routes.attach(
//!     Route::new("/user/:id/", "Users::show")
//!         .with_methods(["GET"])
//!         .with_name("user_show")
//!         .with_filter(":id", "([0-9]+)"),
//! );
//! let router = Router::new(routes).with_base_path("/api");
//!
//! let matched = router
//!     .match_request(&RequestContext::new("GET", "/api/user/42/?tab=info"))
//!     .unwrap();
//! assert_eq!(matched.param("id"), Some("42"));
//! assert!(router.match_path("/api/user/abc/", "GET").is_none());
//! ```

pub mod config;
pub mod dispatch;
pub mod error;
pub mod http;
pub mod observability;
pub mod routing;

pub use config::schema::RouterConfig;
pub use dispatch::{Arguments, HandlerRegistry, Invocation, Target};
pub use error::{DispatchError, RouterError};
pub use http::RequestContext;
pub use routing::{MatchResult, Params, Route, RouteCollection, Router, SharedRouter};
