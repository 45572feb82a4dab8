//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Require an explicit method list per route
//! - Check filter tokens and that filter patterns compile
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Duplicate route names are legal (last wins) and only logged

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::config::schema::{RouteConfig, RouterConfig};

static METHOD_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]+$").expect("method token pattern is valid"));

static FILTER_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^:[A-Za-z0-9_]+$").expect("filter token pattern is valid"));

/// A single semantic problem in a routes file.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("base_path {0:?} must start with '/'")]
    BasePath(String),

    #[error("route #{index}: field `{field}` must not be empty")]
    EmptyField { index: usize, field: &'static str },

    #[error("route {route}: at least one method is required")]
    NoMethods { route: String },

    #[error("route {route}: invalid method token {method:?}")]
    InvalidMethod { route: String, method: String },

    #[error("route {route}: filter key {token:?} is not a placeholder token")]
    InvalidFilterToken { route: String, token: String },

    #[error("route {route}: filter for {token} does not compile: {reason}")]
    InvalidFilterPattern {
        route: String,
        token: String,
        reason: String,
    },
}

/// Validate a parsed configuration.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !config.base_path.is_empty() && !config.base_path.starts_with('/') {
        errors.push(ValidationError::BasePath(config.base_path.clone()));
    }

    let mut seen = HashSet::new();
    for (index, route) in config.routes.iter().enumerate() {
        validate_route(index, route, &mut errors);

        if !route.name.is_empty() && !seen.insert(route.name.as_str()) {
            tracing::warn!(
                route = %route.name,
                "Duplicate route name; reverse generation uses the last definition"
            );
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_route(index: usize, route: &RouteConfig, errors: &mut Vec<ValidationError>) {
    for (field, value) in [
        ("name", &route.name),
        ("path", &route.path),
        ("target", &route.target),
    ] {
        if value.trim().is_empty() {
            errors.push(ValidationError::EmptyField { index, field });
        }
    }

    let label = if route.name.is_empty() {
        format!("#{index}")
    } else {
        route.name.clone()
    };

    if route.methods.is_empty() {
        errors.push(ValidationError::NoMethods {
            route: label.clone(),
        });
    }
    errors.extend(
        route
            .methods
            .iter()
            .filter(|m| !METHOD_TOKEN.is_match(m))
            .map(|m| ValidationError::InvalidMethod {
                route: label.clone(),
                method: m.clone(),
            }),
    );

    let mut tokens: Vec<_> = route.filters.iter().collect();
    tokens.sort();
    for (token, pattern) in tokens {
        if !FILTER_TOKEN.is_match(token) {
            errors.push(ValidationError::InvalidFilterToken {
                route: label.clone(),
                token: token.clone(),
            });
        }
        if let Err(e) = Regex::new(pattern) {
            errors.push(ValidationError::InvalidFilterPattern {
                route: label.clone(),
                token: token.clone(),
                reason: e.to_string(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn route(name: &str, methods: &[&str]) -> RouteConfig {
        RouteConfig {
            name: name.into(),
            path: "/user/:id".into(),
            target: "Users.show".into(),
            methods: methods.iter().map(|m| m.to_string()).collect(),
            parameters: Default::default(),
            filters: HashMap::new(),
            parameters_by_name: false,
        }
    }

    #[test]
    fn test_valid_config() {
        let config = RouterConfig {
            base_path: "/api".into(),
            routes: vec![route("a", &["GET"]), route("a", &["POST"])],
        };
        assert_eq!(validate_config(&config), Ok(()));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut bad = route("", &[]);
        bad.filters.insert("id".into(), "([0-9]+".into());

        let config = RouterConfig {
            base_path: "api".into(),
            routes: vec![bad, route("b", &["get"])],
        };

        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::BasePath("api".into())));
        assert!(errors.contains(&ValidationError::EmptyField { index: 0, field: "name" }));
        assert!(errors.contains(&ValidationError::NoMethods { route: "#0".into() }));
        assert!(errors.contains(&ValidationError::InvalidFilterToken {
            route: "#0".into(),
            token: "id".into(),
        }));
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::InvalidFilterPattern { .. })));
        assert!(errors.contains(&ValidationError::InvalidMethod {
            route: "b".into(),
            method: "get".into(),
        }));
    }
}
