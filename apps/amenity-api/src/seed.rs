//! First-run data loading
//!
//! A seed file is a JSON document holding stations, amenity snapshots,
//! work-order batches and remarks. It is applied only when the stations
//! table is empty, inside one transaction.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use shared_types::{Remark, StationAmenitySnapshot, StationRecord};
use tracing::info;
use works_tracker::{plan_import, ImportBatch};

use crate::repository;
use crate::state::AppState;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub stations: Vec<StationRecord>,
    pub amenities: Vec<StationAmenitySnapshot>,
    pub works: Vec<ImportBatch>,
    pub remarks: Vec<Remark>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub stations: usize,
    pub amenities: usize,
    pub works: usize,
    pub rejected_works: usize,
    pub remarks: usize,
}

pub async fn read_seed(path: &Path) -> Result<SeedData> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read seed file {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid seed file {}", path.display()))
}

/// Apply `seed` unless stations already exist; `None` when skipped
pub async fn apply_if_empty(state: &AppState, mut seed: SeedData) -> Result<Option<SeedSummary>> {
    let existing = repository::count_stations(&state.db).await?;
    if existing > 0 {
        info!("Database already holds {} stations; skipping seed", existing);
        return Ok(None);
    }

    for station in &mut seed.stations {
        repository::check_station(station)?;
    }

    let known = repository::project_ids(&state.db).await?;
    let plan = plan_import(seed.works, |id| known.contains(id));

    let mut tx = state.db.begin().await?;
    for station in &seed.stations {
        repository::upsert_station(&mut *tx, station).await?;
    }
    for snapshot in &seed.amenities {
        repository::upsert_amenity_snapshot(&mut *tx, snapshot).await?;
    }
    for work in &plan.accepted {
        repository::insert_work_order(&mut *tx, work).await?;
    }
    for remark in &seed.remarks {
        repository::add_remark(&mut *tx, remark).await?;
    }
    tx.commit().await?;

    let summary = SeedSummary {
        stations: seed.stations.len(),
        amenities: seed.amenities.len(),
        works: plan.outcome.accepted,
        rejected_works: plan.outcome.rejected.len(),
        remarks: seed.remarks.len(),
    };
    info!(?summary, "Seed data loaded");
    Ok(Some(summary))
}

pub async fn load_if_empty(state: &AppState, path: &Path) -> Result<Option<SeedSummary>> {
    let seed = read_seed(path).await?;
    apply_if_empty(state, seed).await
}
