//! Handler registry.
//!
//! Handlers are plain closures registered at startup under a target
//! identifier. Lookup tries the full identifier (`Users::show`) first and
//! falls back to the module (`Users`), so one closure can serve every
//! action of a module.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::dispatch::target::Invocation;
use crate::error::DispatchError;

pub type Handler<T> = Arc<dyn Fn(&Invocation) -> T + Send + Sync>;

pub struct HandlerRegistry<T> {
    handlers: HashMap<String, Handler<T>>,
}

impl<T> HandlerRegistry<T> {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register `handler` under `target`, replacing any previous one.
    pub fn register<F>(&mut self, target: impl Into<String>, handler: F) -> &mut Self
    where
        F: Fn(&Invocation) -> T + Send + Sync + 'static,
    {
        self.handlers.insert(target.into(), Arc::new(handler));
        self
    }

    pub fn with_handler<F>(mut self, target: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&Invocation) -> T + Send + Sync + 'static,
    {
        self.register(target, handler);
        self
    }

    pub fn contains(&self, target: &str) -> bool {
        self.handlers.contains_key(target)
    }

    pub fn invoke(&self, invocation: &Invocation) -> Result<T, DispatchError> {
        let target = invocation.target();
        let key = target.to_string();

        let handler = self
            .handlers
            .get(&key)
            .or_else(|| self.handlers.get(target.module()))
            .ok_or_else(|| DispatchError::UnknownTarget(key.clone()))?;

        tracing::debug!(handler = %key, "Dispatching to handler");
        Ok(handler(invocation))
    }
}

impl<T> Default for HandlerRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for HandlerRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut targets: Vec<_> = self.handlers.keys().collect();
        targets.sort();
        f.debug_struct("HandlerRegistry")
            .field("targets", &targets)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::target::{Arguments, Target};

    fn invocation(target: &str, args: Vec<&str>) -> Invocation {
        Invocation::new(
            Target::parse(target),
            Arguments::Positional(args.into_iter().map(String::from).collect()),
        )
    }

    #[test]
    fn test_exact_target_wins() {
        let registry = HandlerRegistry::new()
            .with_handler("Users::show", |_| "show")
            .with_handler("Users", |_| "module");

        assert_eq!(registry.invoke(&invocation("Users::show", vec![])), Ok("show"));
        assert_eq!(registry.invoke(&invocation("Users::edit", vec![])), Ok("module"));
    }

    #[test]
    fn test_handler_receives_arguments() {
        let registry = HandlerRegistry::new().with_handler("Users::show", |inv: &Invocation| {
            match inv.arguments() {
                Arguments::Positional(values) => values.join(","),
                Arguments::Named(map) => format!("{} named", map.len()),
            }
        });

        let out = registry.invoke(&invocation("Users::show", vec!["7", "info"]));
        assert_eq!(out.as_deref(), Ok("7,info"));
    }

    #[test]
    fn test_unknown_target() {
        let registry: HandlerRegistry<()> = HandlerRegistry::new();
        assert_eq!(
            registry.invoke(&invocation("Missing::action", vec![])),
            Err(DispatchError::UnknownTarget("Missing::action".into()))
        );
    }
}
