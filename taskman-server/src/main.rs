//! Taskman server -- minimal task-tracking REST service.
//!
//! An axum HTTP server exposing CRUD operations on task records under
//! `/api/tasks`, backed by an in-memory store.
//!
//! # Usage
//!
//! ```bash
//! # Run on default address 0.0.0.0:8080
//! cargo run --bin taskman-server
//!
//! # Run on custom address
//! cargo run --bin taskman-server -- --bind 127.0.0.1:3000
//!
//! # Or via environment variable
//! TASKMAN_ADDR=127.0.0.1:3000 cargo run --bin taskman-server
//! ```

use std::sync::Arc;

use clap::Parser;
use taskman_server::config::{ServerCliArgs, ServerConfig};
use taskman_server::http;
use taskman_server::service::TaskService;
use taskman_server::store::MemoryStore;

#[tokio::main]
async fn main() {
    let cli = ServerCliArgs::parse();

    // Load config from CLI args + config file + env vars + defaults.
    let config = match ServerConfig::load(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            std::process::exit(1);
        }
    };

    // Initialize tracing with the resolved log level.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::info!(addr = %config.bind_addr, "starting taskman server");

    let service = Arc::new(TaskService::new(MemoryStore::new()));

    match http::start_server(&config.bind_addr, service).await {
        Ok((bound_addr, handle)) => {
            tracing::info!(addr = %bound_addr, "taskman server listening");
            if let Err(e) = handle.await {
                tracing::error!(error = %e, "server task failed");
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to start server");
            std::process::exit(1);
        }
    }
}
