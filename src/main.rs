//! Management CLI for routes files.
//!
//! ```text
//! path-router --config routes.toml routes
//! path-router --config routes.toml match GET /api/user/42/
//! path-router --config routes.toml generate user_show id=42
//! path-router --config routes.toml watch
//! ```

use std::collections::HashMap;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::json;

use path_router::config::{load_config, ConfigWatcher};
use path_router::observability::logging::{init_logging, DEFAULT_DIRECTIVE};
use path_router::{RequestContext, Router, SharedRouter};

#[derive(Parser)]
#[command(name = "path-router")]
#[command(about = "Inspect and test a routes file", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "routes.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List routes in match priority order
    Routes,
    /// Match a request against the routes
    Match {
        method: String,
        path: String,
        /// Form `_method` override (PUT or DELETE)
        #[arg(long)]
        form_method: Option<String>,
    },
    /// Generate a URL from a route name
    Generate {
        name: String,
        /// Parameters as key=value
        #[arg(value_parser = parse_key_value)]
        params: Vec<(String, String)>,
    },
    /// Reload the routes whenever the file changes
    Watch,
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got {s:?}"))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(DEFAULT_DIRECTIVE)?;

    let cli = Cli::parse();
    let config = load_config(&cli.config)?;
    let router = Router::from_config(&config);

    match cli.command {
        Commands::Routes => {
            for route in router.routes() {
                println!(
                    "{:<20} {:<24} {:<30} {}",
                    route.name().unwrap_or("-"),
                    route.methods().join(","),
                    route.template(),
                    route.target()
                );
            }
        }
        Commands::Match {
            method,
            path,
            form_method,
        } => {
            let req = RequestContext::new(method, path).with_form_method(form_method.as_deref());
            match router.match_request(&req) {
                Some(matched) => {
                    let route = matched.route();
                    let out = json!({
                        "name": route.name(),
                        "template": route.template(),
                        "target": route.target(),
                        "params": matched.params(),
                    });
                    println!("{}", serde_json::to_string_pretty(&out)?);
                }
                None => println!("no route matched {} {}", req.method(), req.path()),
            }
        }
        Commands::Generate { name, params } => {
            let params: HashMap<String, String> = params.into_iter().collect();
            println!("{}", router.generate(&name, &params)?);
        }
        Commands::Watch => {
            let shared = SharedRouter::new(router);
            let (watcher, mut updates) = ConfigWatcher::new(&cli.config);
            let _watcher = watcher.run()?;

            loop {
                tokio::select! {
                    Some(config) = updates.recv() => shared.apply_config(&config),
                    _ = tokio::signal::ctrl_c() => break,
                }
            }
            tracing::info!("Watcher stopped");
        }
    }

    Ok(())
}
