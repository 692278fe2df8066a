//! bird-growth CLI
//!
//! Collects X/Twitter account growth through the bird CLI into SQLite and
//! exports a JSON snapshot for a dashboard.

mod cli;
mod commands;
mod config;
mod data;
mod export;
mod models;
mod storage;

use tracing_subscriber::EnvFilter;


fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = cli::run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
