//! Swappable router handle for live configuration updates.
//!
//! Readers take a snapshot with [`SharedRouter::load`] and keep matching
//! against it even if a reload lands mid-request. A reload builds a whole
//! new [`Router`] and swaps it in, so the name index can never lag behind
//! the route list.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::config::schema::RouterConfig;
use crate::routing::router::Router;

#[derive(Debug)]
pub struct SharedRouter {
    current: ArcSwap<Router>,
}

impl SharedRouter {
    pub fn new(router: Router) -> Self {
        Self {
            current: ArcSwap::from_pointee(router),
        }
    }

    pub fn from_config(config: &RouterConfig) -> Self {
        Self::new(Router::from_config(config))
    }

    /// Current router snapshot.
    pub fn load(&self) -> Arc<Router> {
        self.current.load_full()
    }

    /// Swap in `router`, returning the one it replaced.
    pub fn replace(&self, router: Router) -> Arc<Router> {
        self.current.swap(Arc::new(router))
    }

    /// Rebuild from `config` and swap it in.
    pub fn apply_config(&self, config: &RouterConfig) {
        let previous = self.replace(Router::from_config(config));
        tracing::info!(
            previous_routes = previous.routes().len(),
            routes = config.routes.len(),
            "Router configuration applied"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::route::Route;

    #[test]
    fn test_snapshot_survives_replace() {
        let shared = SharedRouter::new(Router::new(
            [Route::new("/old", "Old").with_methods(["GET"])].into_iter().collect(),
        ));
        let before = shared.load();

        shared.replace(Router::new(
            [Route::new("/new", "New").with_methods(["GET"])].into_iter().collect(),
        ));

        assert!(before.match_path("/old", "GET").is_some());
        assert!(shared.load().match_path("/old", "GET").is_none());
        assert!(shared.load().match_path("/new", "GET").is_some());
    }
}
