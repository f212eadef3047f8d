//! Station amenity API server

use std::sync::Arc;

use amenity_api::{build_router, seed, AppState, Args};
use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(args.log_directives()))?;
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Initializing amenity API...");
    let state = AppState::connect(&args.database_url).await?;

    if let Some(path) = &args.seed {
        if let Some(summary) = seed::load_if_empty(&state, path).await? {
            info!(
                "Seeded {} stations, {} amenity snapshots, {} works, {} remarks",
                summary.stations, summary.amenities, summary.works, summary.remarks
            );
        }
    }

    let app = build_router(Arc::new(state));

    // Start server
    let addr = args.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Starting amenity API on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
