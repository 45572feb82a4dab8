//! Metrics collection.
//!
//! # Metrics
//! - `router_matches_total` (counter): successful matches by route name
//! - `router_misses_total` (counter): requests no route accepted, by method
//! - `router_config_reloads_total` (counter): reload attempts by outcome
//!
//! # Design Decisions
//! - Emitted through the `metrics` facade; the host installs the recorder
//! - Without a recorder every call is a no-op

pub fn record_match(route: &str) {
    ::metrics::counter!("router_matches_total", "route" => route.to_string()).increment(1);
}

pub fn record_miss(method: &str) {
    ::metrics::counter!("router_misses_total", "method" => method.to_string()).increment(1);
}

pub fn record_reload(outcome: &'static str) {
    ::metrics::counter!("router_config_reloads_total", "outcome" => outcome).increment(1);
}
