//! Station amenity API
//!
//! REST endpoints for:
//! - Station records and recorded amenities
//! - Compliance reports against the Railway Board norms
//! - Sanctioned works, their progress summary and remarks

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod overview;
pub mod report;
pub mod repository;
pub mod seed;
pub mod state;

pub use config::Args;
pub use error::ApiError;
pub use state::AppState;

pub fn build_router(state: Arc<AppState>) -> Router {
    // CORS configuration for the dashboard front end
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        .route("/api/overview", get(handlers::overview))
        // Stations
        .route(
            "/api/stations",
            get(handlers::list_stations).post(handlers::upsert_station),
        )
        .route("/api/stations/:code", get(handlers::get_station))
        .route("/api/stations/:code/amenities", put(handlers::put_amenities))
        .route(
            "/api/stations/:code/compliance",
            get(handlers::station_compliance),
        )
        .route("/api/norms/:category", get(handlers::norms))
        // Works
        .route(
            "/api/works",
            get(handlers::list_works).post(handlers::create_work),
        )
        .route("/api/works/import", post(handlers::import_works))
        .route(
            "/api/works/:project_id",
            get(handlers::get_work).put(handlers::update_work),
        )
        .route("/api/summary/works", get(handlers::works_summary))
        // Remarks
        .route(
            "/api/remarks",
            get(handlers::list_remarks).post(handlers::add_remark),
        )
        // Add middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
