//! HTTP handlers for the amenity API

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{Local, NaiveDate};
use shared_types::{Remark, StationAmenitySnapshot, StationCategory, StationRecord, WorkOrder};
use works_tracker::{
    plan_import, summarize, validate, ImportBatch, ImportOutcome, WorkFilter, WorkOrderUpdate,
    WorksSummaryRow,
};

use crate::error::ApiError;
use crate::models::*;
use crate::overview::{summarize_stations, StationOverview};
use crate::report::ReportAssembler;
use crate::repository;
use crate::state::AppState;

/// Health check endpoint
pub async fn health() -> &'static str {
    "OK"
}

pub async fn overview(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StationOverview>, ApiError> {
    let stations = repository::list_stations(&state.db, &StationQuery::default()).await?;
    Ok(Json(summarize_stations(&stations)))
}

// ============================================================
// Stations
// ============================================================

pub async fn list_stations(
    State(state): State<Arc<AppState>>,
    Query(query): Query<StationQuery>,
) -> Result<Json<Vec<StationResponse>>, ApiError> {
    let stations = repository::list_stations(&state.db, &query).await?;
    Ok(Json(stations.into_iter().map(StationResponse::from).collect()))
}

pub async fn get_station(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<Json<StationResponse>, ApiError> {
    let station = repository::fetch_station(&state.db, &code)
        .await?
        .ok_or(ApiError::StationNotFound(code))?;
    Ok(Json(station.into()))
}

/// Create or replace a station record
pub async fn upsert_station(
    State(state): State<Arc<AppState>>,
    Json(mut station): Json<StationRecord>,
) -> Result<(StatusCode, Json<StationResponse>), ApiError> {
    repository::check_station(&mut station)?;

    repository::upsert_station(&state.db, &station).await?;
    tracing::info!("Upserted station {}", station.station_code);

    Ok((StatusCode::CREATED, Json(station.into())))
}

/// Replace the recorded amenity fields of a station
pub async fn put_amenities(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
    Json(req): Json<AmenitiesRequest>,
) -> Result<Json<StationAmenitySnapshot>, ApiError> {
    let station = repository::fetch_station(&state.db, &code)
        .await?
        .ok_or(ApiError::StationNotFound(code))?;

    let snapshot = StationAmenitySnapshot {
        station_code: station.station_code,
        fields: req.fields,
    };
    repository::upsert_amenity_snapshot(&state.db, &snapshot).await?;
    tracing::debug!(
        "Stored {} amenity fields for {}",
        snapshot.fields.len(),
        snapshot.station_code
    );

    Ok(Json(snapshot))
}

pub async fn station_compliance(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<Json<StationComplianceResponse>, ApiError> {
    let station = repository::fetch_station(&state.db, &code)
        .await?
        .ok_or(ApiError::StationNotFound(code))?;
    let snapshot = repository::fetch_amenity_snapshot(&state.db, &station.station_code).await?;
    let works = repository::fetch_work_orders(
        &state.db,
        &WorkFilter {
            station: Some(station.station_code.clone()),
            ..Default::default()
        },
    )
    .await?;

    let response = ReportAssembler::new(&state.engine).assemble(station, snapshot.as_ref(), &works);
    Ok(Json(response))
}

pub async fn norms(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
) -> Json<NormsResponse> {
    let catalog = state.engine.catalog();
    Json(NormsResponse {
        category: StationCategory::parse(&category),
        minimum_essential: catalog.get_minimum_amenities(&category).clone(),
        desirable: catalog.get_desirable_amenities(&category).clone(),
        requested: category,
    })
}

// ============================================================
// Works
// ============================================================

pub async fn list_works(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<WorkFilter>,
) -> Result<Json<Vec<WorkOrder>>, ApiError> {
    Ok(Json(repository::fetch_work_orders(&state.db, &filter).await?))
}

pub async fn create_work(
    State(state): State<Arc<AppState>>,
    Json(mut work): Json<WorkOrder>,
) -> Result<(StatusCode, Json<WorkOrder>), ApiError> {
    work.project_id = work.project_id.trim().to_string();
    validate(&work)?;

    if !repository::insert_work_order(&state.db, &work).await? {
        return Err(ApiError::DuplicateProject(work.project_id));
    }
    tracing::info!("Added work {} ({})", work.project_id, work.pending_with);

    Ok((StatusCode::CREATED, Json(work)))
}

pub async fn get_work(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<String>,
) -> Result<Json<WorkOrder>, ApiError> {
    let work = repository::fetch_work_order(&state.db, &project_id)
        .await?
        .ok_or(ApiError::WorkOrderNotFound(project_id))?;
    Ok(Json(work))
}

pub async fn update_work(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<String>,
    Json(update): Json<WorkOrderUpdate>,
) -> Result<Json<WorkOrder>, ApiError> {
    let current = repository::fetch_work_order(&state.db, &project_id)
        .await?
        .ok_or_else(|| ApiError::WorkOrderNotFound(project_id.clone()))?;

    let updated = update.apply(&current)?;
    if !repository::update_work_order(&state.db, &updated).await? {
        return Err(ApiError::WorkOrderNotFound(project_id));
    }
    tracing::info!("Updated work {}", updated.project_id);

    Ok(Json(updated))
}

/// Bulk import; duplicates are skipped and invalid rows reported
pub async fn import_works(
    State(state): State<Arc<AppState>>,
    Json(batches): Json<Vec<ImportBatch>>,
) -> Result<Json<ImportOutcome>, ApiError> {
    let known = repository::project_ids(&state.db).await?;
    let plan = plan_import(batches, |id| known.contains(id));

    let mut outcome = plan.outcome;
    let mut tx = state.db.begin().await?;
    for work in &plan.accepted {
        // Another writer may have stored the id since it was read
        if !repository::insert_work_order(&mut *tx, work).await? {
            outcome.accepted -= 1;
            outcome.skipped_duplicates += 1;
        }
    }
    tx.commit().await?;

    Ok(Json(outcome))
}

pub async fn works_summary(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<WorksSummaryRow>>, ApiError> {
    let works = repository::fetch_work_orders(&state.db, &WorkFilter::default()).await?;
    Ok(Json(summarize(&works)))
}

// ============================================================
// Remarks
// ============================================================

pub async fn list_remarks(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Remark>>, ApiError> {
    Ok(Json(repository::list_remarks(&state.db).await?))
}

pub async fn add_remark(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RemarkRequest>,
) -> Result<(StatusCode, Json<Remark>), ApiError> {
    if req.project_id.trim().is_empty() {
        return Err(ApiError::InvalidRequest(
            "project_id must not be empty".to_string(),
        ));
    }
    if req.remark.trim().is_empty() {
        return Err(ApiError::InvalidRequest("remark must not be empty".to_string()));
    }

    let date = match req.date.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|e| ApiError::InvalidRequest(format!("Invalid date {:?}: {}", raw, e)))?,
        None => Local::now().date_naive(),
    };

    let remark = Remark {
        date: date.format("%Y-%m-%d").to_string(),
        pending_with: req.pending_with,
        project_id: req.project_id.trim().to_string(),
        department: req.department,
        remark: req.remark,
    };
    repository::add_remark(&state.db, &remark).await?;

    Ok((StatusCode::CREATED, Json(remark)))
}
