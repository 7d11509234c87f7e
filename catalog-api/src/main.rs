//! catalog-api - Music catalog CRUD service
//!
//! Serves artist/genre/song CRUD over HTTP, backed by a SQLite database
//! in the resolved root folder.

use anyhow::Result;
use catalog_api::{build_router, AppState};
use catalog_common::config;
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "catalog-api", version, about = "Music catalog CRUD HTTP API")]
struct Args {
    /// Root folder holding the catalog database
    #[arg(long)]
    root_folder: Option<String>,

    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    bind: String,

    /// TCP port to listen on
    #[arg(long, default_value_t = 5740)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing subscriber. The config file's logging level is
    // the default; RUST_LOG overrides it.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(config::log_level("catalog-api"))
            }),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting Music Catalog API (catalog-api) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    // Resolve root folder and create it if missing
    let root_folder = config::resolve_root_folder(args.root_folder.as_deref(), "catalog-api");
    config::ensure_root_folder(&root_folder)?;

    let db_path = config::database_path(&root_folder);
    info!("Database path: {}", db_path.display());

    // Open or create database, bringing the schema up to date
    let pool = catalog_common::db::init_database(&db_path).await?;

    // Create application state and router
    let state = AppState::new(pool);
    let app = build_router(state);

    let addr = format!("{}:{}", args.bind, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("catalog-api listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
