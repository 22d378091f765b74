//! Item store service.
//!
//! Serves a single in-memory collection of JSON items over HTTP.
//!
//! # Architecture Overview
//!
//! ```text
//!   Client Request
//!   ──────────────▶ ┌────────────────┐    ┌──────────────┐    ┌─────────────┐
//!                   │  http server   │───▶│   handlers   │───▶│  ItemStore  │
//!                   │ cors/trace/id  │    │ body decoding│    │ items + ids │
//!   Client Response └────────────────┘◀───└──────────────┘◀───└─────────────┘
//!   ◀──────────────
//!
//!   Cross-cutting: config · lifecycle (startup/shutdown) · observability
//! ```
//!
//! # Endpoints
//! - `GET /items` list all items
//! - `POST /items` create an item from the JSON body
//! - `PUT /items/{id}` merge the JSON body into an item
//! - `DELETE /items/{id}` remove an item

use std::path::PathBuf;

use clap::Parser;

use item_store::config::{load_config, ServiceConfig};
use item_store::lifecycle::{self, signals, Shutdown};
use item_store::observability::logging;

#[derive(Parser)]
#[command(name = "item-store")]
#[command(about = "In-memory CRUD service for JSON items", long_about = None)]
struct Args {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };

    logging::init_logging(&config.observability);
    tracing::info!("item-store v{} starting", env!("CARGO_PKG_VERSION"));

    let shutdown = Shutdown::new();
    let trigger = shutdown.clone();
    tokio::spawn(async move {
        signals::wait_for_signal().await;
        trigger.trigger();
    });

    lifecycle::run(config, &shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
