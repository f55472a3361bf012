//! Bank Demo - Main Application Entry Point
//!
//! A small web form server for a banking demo. It moves money between
//! accounts held in memory and writes the whole account table back to a
//! JSON file after every change.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Storage**: JSON file, loaded once and rewritten after each mutation
//! - **Views**: Server-rendered HTML pages
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Load the account table from the accounts file
//! 3. Build HTTP router with routes and middleware
//! 4. Start server on configured port

mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod services;
mod state;
mod store;
mod views;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Load accounts; the same file is rewritten after every transfer or payment
    let store = store::AccountStore::open(store::JsonFile::new(&config.accounts_file))?;
    let state = state::AppState::new(store, config.credit_account.as_str());

    let app = routes::router(state);

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
