//! Route lookup and reverse generation.
//!
//! # Responsibilities
//! - Store routes with their compiled matchers
//! - Look up the first route matching a request
//! - Bind captured values to placeholder names
//! - Generate URLs from a route name and parameters
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(1) name lookup via HashMap, last registration wins
//! - O(n) ordered scan for matching, first match wins
//! - Explicit `None` for no match; only reverse lookup by an unknown name
//!   is an error

use std::collections::HashMap;

use regex::Captures;

use crate::config::schema::RouterConfig;
use crate::dispatch::{HandlerRegistry, Invocation};
use crate::error::{DispatchError, RouterError, RouterResult};
use crate::http::RequestContext;
use crate::observability::metrics;
use crate::routing::collection::RouteCollection;
use crate::routing::matcher::CompiledRoute;
use crate::routing::route::{Params, Route, PLACEHOLDER};

/// A successful match: the route and the parameters bound for this request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult<'r> {
    route: &'r Route,
    params: Params,
}

impl<'r> MatchResult<'r> {
    pub fn route(&self) -> &'r Route {
        self.route
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn into_params(self) -> Params {
        self.params
    }

    /// Invocation request for the route's target.
    pub fn invocation(&self) -> Invocation {
        self.route.invocation(self.params.clone())
    }
}

/// Router over a fixed collection of routes.
#[derive(Debug, Clone)]
pub struct Router {
    routes: RouteCollection,
    compiled: Vec<CompiledRoute>,
    named_routes: HashMap<String, usize>,
    base_path: String,
}

impl Router {
    /// Build the router and its name index from `routes`.
    pub fn new(routes: RouteCollection) -> Self {
        let mut named_routes = HashMap::new();
        for (index, route) in routes.iter().enumerate() {
            if let Some(name) = route.name() {
                if let Some(previous) = named_routes.insert(name.to_string(), index) {
                    tracing::debug!(
                        route_name = %name,
                        previous = %routes.all()[previous].template(),
                        current = %route.template(),
                        "Route name registered twice; keeping the later route"
                    );
                }
            }
        }

        let mut router = Self {
            routes,
            compiled: Vec::new(),
            named_routes,
            base_path: String::new(),
        };
        router.compile();
        router
    }

    /// Build a router from a loaded configuration.
    pub fn from_config(config: &RouterConfig) -> Self {
        let routes: RouteCollection = config.routes.iter().map(|r| r.to_route()).collect();
        let router = Self::new(routes).with_base_path(&config.base_path);

        tracing::info!(
            routes = router.routes.len(),
            named = router.named_routes.len(),
            base_path = %router.base_path,
            "Router built from configuration"
        );
        router
    }

    /// Prefix applied to every route pattern. Trailing `/` are dropped.
    pub fn set_base_path(&mut self, base_path: &str) {
        self.base_path = base_path.trim_end_matches('/').to_string();
        self.compile();
    }

    pub fn with_base_path(mut self, base_path: &str) -> Self {
        self.set_base_path(base_path);
        self
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn routes(&self) -> &RouteCollection {
        &self.routes
    }

    /// Route registered under `name`, if any.
    pub fn named(&self, name: &str) -> Option<&Route> {
        self.named_routes
            .get(name)
            .map(|&index| &self.routes.all()[index])
    }

    /// Convenience for [`match_request`](Self::match_request).
    pub fn match_path(&self, path: &str, method: &str) -> Option<MatchResult<'_>> {
        self.match_request(&RequestContext::new(method, path))
    }

    /// Find the first route accepting the request's method whose pattern
    /// matches its path.
    ///
    /// A query string on the path is ignored. Returns `None` when nothing
    /// matches.
    pub fn match_request(&self, req: &RequestContext) -> Option<MatchResult<'_>> {
        let path = req.request_path();

        for (route, compiled) in self.routes.iter().zip(&self.compiled) {
            let Some(captures) = compiled.captures(req) else {
                continue;
            };

            let names = route.placeholder_names();
            if !names.is_empty() && names.len() != captures.len() {
                tracing::debug!(
                    template = %route.template(),
                    placeholders = names.len(),
                    groups = captures.len(),
                    "Placeholder count differs from capture groups; skipping route"
                );
                continue;
            }

            let captured: Params = names.into_iter().zip(captures).collect();
            let params = route.bind_parameters(captured);

            tracing::debug!(
                method = %req.method(),
                path = %path,
                template = %route.template(),
                "Route matched"
            );
            metrics::record_match(route.name().unwrap_or("unnamed"));

            return Some(MatchResult { route, params });
        }

        tracing::trace!(method = %req.method(), path = %path, "No route matched");
        metrics::record_miss(req.method());
        None
    }

    /// Match the request and invoke the route's handler.
    ///
    /// `Ok(None)` when nothing matched.
    pub fn dispatch<T>(
        &self,
        req: &RequestContext,
        handlers: &HandlerRegistry<T>,
    ) -> Result<Option<T>, DispatchError> {
        match self.match_request(req) {
            Some(matched) => handlers.invoke(&matched.invocation()).map(Some),
            None => Ok(None),
        }
    }

    /// Build a URL from the template of the route named `name`.
    ///
    /// Every `:key` token with a value in `params` is replaced, including
    /// repeated tokens. Tokens without a value are left untouched.
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use path_router::{Route, RouteCollection, Router};
    ///
    /// let routes: RouteCollection =
    ///     [Route::new("/user/:id/", "Users::show").with_name("user_show")].into_iter().collect();
    /// let router = Router::new(routes);
    ///
    /// let params = HashMap::from([("id".to_string(), "7".to_string())]);
    /// assert_eq!(router.generate("user_show", &params).unwrap(), "/user/7/");
    /// assert!(router.generate("missing", &params).is_err());
    /// ```
    pub fn generate(&self, name: &str, params: &HashMap<String, String>) -> RouterResult<String> {
        let route = self
            .named(name)
            .ok_or_else(|| RouterError::RouteNotFound(name.to_string()))?;

        let url = PLACEHOLDER.replace_all(route.template(), |caps: &Captures<'_>| {
            params
                .get(&caps[1])
                .cloned()
                .unwrap_or_else(|| caps[0].to_string())
        });
        Ok(url.into_owned())
    }

    fn compile(&mut self) {
        self.compiled = self
            .routes
            .iter()
            .map(|route| CompiledRoute::new(&self.base_path, route))
            .collect();
    }
}

impl From<RouteCollection> for Router {
    fn from(routes: RouteCollection) -> Self {
        Self::new(routes)
    }
}
