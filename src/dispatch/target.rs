//! Handler target identifiers and invocation requests.

use std::fmt;

use crate::routing::route::Params;

/// Separator between module and action in a target identifier.
pub const ACTION_SEPARATOR: &str = "::";

/// A parsed `"Module::action"` identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Target {
    module: String,
    action: Option<String>,
}

impl Target {
    /// Split on the first `::`. An empty or blank action means the target is
    /// a constructible unit with no action. Anything after a second `::` is
    /// ignored.
    pub fn parse(identifier: &str) -> Self {
        let mut parts = identifier.split(ACTION_SEPARATOR);
        let module = parts.next().unwrap_or_default().to_string();
        let action = parts
            .next()
            .filter(|action| !action.trim().is_empty())
            .map(str::to_string);

        Self { module, action }
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.action {
            Some(action) => write!(f, "{}{}{}", self.module, ACTION_SEPARATOR, action),
            None => f.write_str(&self.module),
        }
    }
}

/// How bound parameters reach the handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arguments {
    /// Values in parameter order.
    Positional(Vec<String>),
    /// The whole parameter map as one argument.
    Named(Params),
}

/// What to call, and with which arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    target: Target,
    arguments: Arguments,
}

impl Invocation {
    pub fn new(target: Target, arguments: Arguments) -> Self {
        Self { target, arguments }
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn arguments(&self) -> &Arguments {
        &self.arguments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_action() {
        let target = Target::parse("Users::show");
        assert_eq!(target.module(), "Users");
        assert_eq!(target.action(), Some("show"));
        assert_eq!(target.to_string(), "Users::show");
    }

    #[test]
    fn test_parse_without_action() {
        assert_eq!(Target::parse("HomePage").action(), None);
        assert_eq!(Target::parse("HomePage::").action(), None);
        assert_eq!(Target::parse("HomePage::  ").action(), None);
        assert_eq!(Target::parse("HomePage::").to_string(), "HomePage");
    }
}
