//! Route definitions and pattern compilation.
//!
//! # Responsibilities
//! - Hold one path template with its methods, name, target and filters
//! - Compile the template into a regex fragment on demand
//! - Merge preset parameters with values captured during matching
//!
//! # Design Decisions
//! - Immutable once registered; matching never writes back into a route
//! - Templates are regex fragments: literal segments are not escaped
//! - Placeholder scan (`:name`) is shared by compilation, matching and
//!   reverse generation so all three agree on what a placeholder is

use std::collections::HashMap;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::dispatch::{Arguments, Invocation, Target};

/// Ordered parameter map. Positional handler arguments follow this order.
pub type Params = IndexMap<String, String>;

/// Reserved preset key carrying a raw pattern fragment appended to the
/// compiled template instead of being bound as a parameter.
pub const ADDON_REGEX_KEY: &str = "addon_regex";

/// Pattern substituted for a placeholder without a filter. ASCII only:
/// non-ASCII path bytes arrive percent-encoded.
pub const DEFAULT_PLACEHOLDER_PATTERN: &str = r"([A-Za-z0-9_\-%]+)";

/// Methods accepted by [`Route::with_any_method`].
pub const ALL_METHODS: [&str; 7] = ["GET", "POST", "PUT", "DELETE", "PATCH", "HEAD", "OPTIONS"];

pub(crate) static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r":([A-Za-z0-9_]+)").expect("placeholder pattern is valid"));

/// One registered mapping from a path template and method set to a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    template: String,
    methods: Vec<String>,
    target: String,
    name: Option<String>,
    filters: HashMap<String, String>,
    parameters: Params,
    parameters_by_name: bool,
    extra_pattern_suffix: String,
}

impl Route {
    /// Create a route for `template` resolving to `target`.
    ///
    /// The template always ends up with a trailing `/`; an empty template
    /// becomes `/`. No methods are accepted until [`with_methods`] or
    /// [`with_any_method`] is called.
    ///
    /// [`with_methods`]: Route::with_methods
    /// [`with_any_method`]: Route::with_any_method
    pub fn new(template: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            template: normalize_template(template.into()),
            methods: Vec::new(),
            target: target.into(),
            name: None,
            filters: HashMap::new(),
            parameters: Params::new(),
            parameters_by_name: false,
            extra_pattern_suffix: String::new(),
        }
    }

    pub fn with_methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.methods = methods.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_any_method(self) -> Self {
        self.with_methods(ALL_METHODS)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Override the pattern used for one placeholder token, e.g. `":id"`.
    ///
    /// The filter replaces the whole token, so it must bring its own
    /// capture group if the value should be bound.
    pub fn with_filter(mut self, token: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.filters.insert(token.into(), pattern.into());
        self
    }

    pub fn with_filters<I, K, V>(mut self, filters: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.filters
            .extend(filters.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Merge preset parameters into the route.
    ///
    /// Existing keys are overwritten in place and new keys appended. A
    /// value under [`ADDON_REGEX_KEY`] becomes the extra pattern suffix.
    pub fn with_parameters<I, K, V>(mut self, parameters: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in parameters {
            self.parameters.insert(key.into(), value.into());
        }
        if let Some(suffix) = self.parameters.shift_remove(ADDON_REGEX_KEY) {
            self.extra_pattern_suffix = suffix;
        }
        self
    }

    /// Pass the whole parameter map to the handler as a single argument.
    pub fn with_parameters_by_name(mut self, by_name: bool) -> Self {
        self.parameters_by_name = by_name;
        self
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn methods(&self) -> &[String] {
        &self.methods
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn filters(&self) -> &HashMap<String, String> {
        &self.filters
    }

    /// Preset parameters, before anything is captured.
    pub fn parameters(&self) -> &Params {
        &self.parameters
    }

    pub fn parameters_by_name(&self) -> bool {
        self.parameters_by_name
    }

    pub fn extra_pattern_suffix(&self) -> &str {
        &self.extra_pattern_suffix
    }

    /// Substitute every placeholder with its filter or the default pattern,
    /// then append the extra suffix.
    ///
    /// ```
    /// use path_router::Route;
    ///
    /// let route = Route::new("/user/:id/", "Users::show").with_filter(":id", "([0-9]+)");
    /// assert_eq!(route.compile_pattern(), "/user/([0-9]+)/");
    /// ```
    pub fn compile_pattern(&self) -> String {
        let compiled = PLACEHOLDER.replace_all(&self.template, |caps: &Captures<'_>| {
            self.filters
                .get(&caps[0])
                .cloned()
                .unwrap_or_else(|| DEFAULT_PLACEHOLDER_PATTERN.to_string())
        });
        format!("{}{}", compiled, self.extra_pattern_suffix)
    }

    /// Placeholder names in template order, without the leading `:`.
    pub fn placeholder_names(&self) -> Vec<String> {
        PLACEHOLDER
            .captures_iter(&self.template)
            .map(|caps| caps[1].to_string())
            .collect()
    }

    /// Presets merged with `captured`; captured values win on conflict.
    pub fn bind_parameters(&self, captured: Params) -> Params {
        let mut params = self.parameters.clone();
        params.extend(captured);
        params.shift_remove(ADDON_REGEX_KEY);
        params
    }

    /// Build the handler invocation for a set of bound parameters.
    ///
    /// With an action (`"Users::show"`) the values are passed positionally
    /// unless the route binds by name. Without an action the target is a
    /// constructible unit and receives the whole map.
    pub fn invocation(&self, params: Params) -> Invocation {
        let target = Target::parse(&self.target);
        let arguments = if target.action().is_some() && !self.parameters_by_name {
            Arguments::Positional(params.into_values().collect())
        } else {
            Arguments::Named(params)
        };
        Invocation::new(target, arguments)
    }
}

fn normalize_template(mut template: String) -> String {
    if !template.ends_with('/') {
        template.push('/');
    }
    template
}
