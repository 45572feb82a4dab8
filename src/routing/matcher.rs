//! Route matching logic.
//!
//! # Responsibilities
//! - Match the request method (exact, case-sensitive token)
//! - Match the request path against the route's anchored pattern
//! - Combine both conditions with AND semantics in `CompiledRoute`
//!
//! # Design Decisions
//! - Path matching is case-insensitive and tolerates one trailing `/`
//! - Patterns are compiled once per router, not per request
//! - A pattern that fails to compile never matches

use regex::{Regex, RegexBuilder};

use crate::http::RequestContext;
use crate::routing::route::Route;

/// Trait for matching requests against conditions.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the request matches this condition.
    fn matches(&self, req: &RequestContext) -> bool;
}

/// Matches the request method against the route's allowed set.
#[derive(Debug, Clone)]
pub struct MethodMatcher {
    methods: Vec<String>,
}

impl MethodMatcher {
    pub fn new(methods: &[String]) -> Self {
        Self {
            methods: methods.to_vec(),
        }
    }
}

impl Matcher for MethodMatcher {
    fn matches(&self, req: &RequestContext) -> bool {
        self.methods.iter().any(|m| m == req.method())
    }
}

/// Matches the request path and yields the captured groups.
#[derive(Debug, Clone)]
pub struct PathMatcher {
    regex: Option<Regex>,
}

impl PathMatcher {
    /// Build `^<escaped base><pattern without trailing '/'>/?$`.
    pub fn new(base_path: &str, route: &Route) -> Self {
        let compiled = route.compile_pattern();
        let source = format!(
            "^{}{}/?$",
            regex::escape(base_path),
            compiled.trim_end_matches('/')
        );

        let regex = match RegexBuilder::new(&source).case_insensitive(true).build() {
            Ok(regex) => Some(regex),
            Err(e) => {
                tracing::warn!(
                    template = %route.template(),
                    pattern = %source,
                    error = %e,
                    "Route pattern failed to compile; route will never match"
                );
                None
            }
        };

        Self { regex }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.regex.as_ref().map(Regex::as_str)
    }

    /// Captured group values in order, or `None` if the path doesn't match.
    ///
    /// Trailing groups that did not take part in the match are dropped, so
    /// an optional group at the end of a pattern only counts when present.
    /// Non-participating groups before a participating one come back empty.
    pub fn captures(&self, path: &str) -> Option<Vec<String>> {
        let caps = self.regex.as_ref()?.captures(path)?;
        let mut groups: Vec<Option<String>> = caps
            .iter()
            .skip(1)
            .map(|group| group.map(|m| m.as_str().to_string()))
            .collect();
        while matches!(groups.last(), Some(None)) {
            groups.pop();
        }
        Some(groups.into_iter().map(Option::unwrap_or_default).collect())
    }
}

/// Both conditions of one route, compiled for a given base path.
#[derive(Debug, Clone)]
pub struct CompiledRoute {
    pub method: MethodMatcher,
    pub path: PathMatcher,
}

impl CompiledRoute {
    pub fn new(base_path: &str, route: &Route) -> Self {
        Self {
            method: MethodMatcher::new(route.methods()),
            path: PathMatcher::new(base_path, route),
        }
    }

    /// Method and path together: the captured groups when both match.
    pub fn captures(&self, req: &RequestContext) -> Option<Vec<String>> {
        if !self.method.matches(req) {
            return None;
        }
        self.path.captures(req.request_path())
    }
}
