//! Shared fixtures for integration tests.

use std::collections::HashMap;

use path_router::config::{parse_config, RouterConfig};
use path_router::Router;

/// Routes file exercising filters, presets, base path and named routes.
pub const ROUTES_TOML: &str = r#"
base_path = "/api/"

[[routes]]
name = "user_show"
path = "/user/:id/"
target = "Users.show"
methods = ["GET"]
[routes.filters]
":id" = "([0-9]+)"

[[routes]]
name = "user_update"
path = "/user/:id/"
target = "Users.update"
methods = ["PUT", "POST"]

[[routes]]
name = "user_by_slug"
path = "/user/:slug/"
target = "Users.profile"
methods = ["GET"]

[[routes]]
name = "feed"
path = "/feed"
target = "Feed"
methods = ["GET"]
parameters_by_name = true
[routes.parameters]
format = "rss"
addon_regex = "(?:\\.xml)?"

[[routes]]
name = "article"
path = "/blog/:year/:slug"
target = "Blog.article"
methods = ["GET"]
[routes.parameters]
layout = "wide"
"#;

#[allow(dead_code)]
pub fn config() -> RouterConfig {
    parse_config(ROUTES_TOML).expect("fixture routes are valid")
}

#[allow(dead_code)]
pub fn router() -> Router {
    Router::from_config(&config())
}

#[allow(dead_code)]
pub fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
