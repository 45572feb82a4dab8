//! Configuration schema definitions.
//!
//! This module defines the routes file structure.
//! All types derive Serde traits for deserialization from TOML.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::routing::route::Route;

/// Root configuration: a base path and named routes in priority order.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RouterConfig {
    /// Prefix applied to every route (e.g. "/api"). Empty for none.
    pub base_path: String,

    /// Route definitions, first match wins.
    pub routes: Vec<RouteConfig>,
}

/// One named route.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct RouteConfig {
    /// Route name used for reverse generation.
    pub name: String,

    /// Path template with `:name` placeholders.
    pub path: String,

    /// Handler target, `Module.action` or `Module::action`.
    pub target: String,

    /// Allowed methods. Must be listed explicitly.
    #[serde(default)]
    pub methods: Vec<String>,

    /// Preset parameters. `addon_regex` is appended to the pattern.
    #[serde(default)]
    pub parameters: IndexMap<String, String>,

    /// Per-placeholder pattern overrides, keyed by token (":id").
    #[serde(default)]
    pub filters: HashMap<String, String>,

    /// Pass parameters to the handler as one map instead of positionally.
    #[serde(default)]
    pub parameters_by_name: bool,
}

impl RouteConfig {
    /// Target with the `.` shorthand expanded to `::`.
    pub fn normalized_target(&self) -> String {
        self.target.replace('.', "::")
    }

    pub fn to_route(&self) -> Route {
        Route::new(self.path.as_str(), self.normalized_target())
            .with_name(self.name.as_str())
            .with_methods(self.methods.iter().map(String::as_str))
            .with_filters(self.filters.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .with_parameters(self.parameters.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .with_parameters_by_name(self.parameters_by_name)
    }
}
