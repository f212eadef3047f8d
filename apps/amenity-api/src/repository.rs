//! SQLite data access
//!
//! Rows are mapped into the shared domain types at this boundary; handlers
//! never see database structs.

use std::collections::{BTreeMap, HashSet};

use chrono::Utc;
use shared_types::{
    normalize_category, FieldValue, Remark, StationAmenitySnapshot, StationRecord, WorkOrder,
};
use sqlx::{Sqlite, SqlitePool};
use works_tracker::WorkFilter;

use crate::error::ApiError;
use crate::models::{DbAmenities, DbRemark, DbStation, DbWorkOrder, StationQuery};

const STATION_COLUMNS: &str = "station_code, station_name, categorisation, zone, division, \
     section, earnings_range, passenger_range, passenger_footfall, platform_type, \
     number_of_platforms";

const WORK_COLUMNS: &str = "project_id, pending_with, year_of_sanction, date_of_sanction, \
     short_name_of_work, block_section, station, allocation, cost, expenditure_to_date, \
     financial_progress_percent, if_umbrella, parent_work, section, remarks, \
     latest_remarks_civil, latest_remarks_electrical, latest_remarks_s_t, \
     latest_remarks_civil_as_on";

// ============================================================
// Stations
// ============================================================

/// Stored form of a station code: trimmed and uppercased
pub fn station_key(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Normalise the code in place and reject records missing a code or name
pub fn check_station(station: &mut StationRecord) -> Result<(), ApiError> {
    station.station_code = station_key(&station.station_code);
    if station.station_code.is_empty() {
        return Err(ApiError::InvalidRequest("station_code must not be empty".to_string()));
    }
    if station.station_name.trim().is_empty() {
        return Err(ApiError::InvalidRequest(format!(
            "station_name must not be empty for {}",
            station.station_code
        )));
    }
    Ok(())
}

pub async fn fetch_station(
    pool: &SqlitePool,
    code: &str,
) -> Result<Option<StationRecord>, sqlx::Error> {
    let row: Option<DbStation> = sqlx::query_as(&format!(
        "SELECT {} FROM stations WHERE station_code = ? COLLATE NOCASE",
        STATION_COLUMNS
    ))
    .bind(code.trim())
    .fetch_optional(pool)
    .await?;

    Ok(row.map(StationRecord::from))
}

/// Stations ordered by code, narrowed by the optional code and category
///
/// The category filter compares normalised categories, so "NSG-3" and
/// "nsg3" select the same stations.
pub async fn list_stations(
    pool: &SqlitePool,
    filter: &StationQuery,
) -> Result<Vec<StationRecord>, sqlx::Error> {
    let rows: Vec<DbStation> = sqlx::query_as(&format!(
        "SELECT {} FROM stations ORDER BY station_code",
        STATION_COLUMNS
    ))
    .fetch_all(pool)
    .await?;

    let code = filter
        .code
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty());
    let category = filter
        .category
        .as_deref()
        .map(normalize_category)
        .filter(|c| !c.is_empty());

    Ok(rows
        .into_iter()
        .map(StationRecord::from)
        .filter(|s| code.map_or(true, |c| s.station_code.eq_ignore_ascii_case(c)))
        .filter(|s| {
            category.as_deref().map_or(true, |c| {
                normalize_category(&s.categorisation).eq_ignore_ascii_case(c)
            })
        })
        .collect())
}

pub async fn count_stations(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM stations")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

pub async fn upsert_station<'e, E>(executor: E, station: &StationRecord) -> Result<(), sqlx::Error>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    sqlx::query(
        r#"
        INSERT INTO stations (station_code, station_name, categorisation, zone, division, section,
                              earnings_range, passenger_range, passenger_footfall, platform_type,
                              number_of_platforms)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        ON CONFLICT(station_code) DO UPDATE SET
            station_name = excluded.station_name,
            categorisation = excluded.categorisation,
            zone = excluded.zone,
            division = excluded.division,
            section = excluded.section,
            earnings_range = excluded.earnings_range,
            passenger_range = excluded.passenger_range,
            passenger_footfall = excluded.passenger_footfall,
            platform_type = excluded.platform_type,
            number_of_platforms = excluded.number_of_platforms
        "#,
    )
    .bind(station_key(&station.station_code))
    .bind(&station.station_name)
    .bind(&station.categorisation)
    .bind(&station.zone)
    .bind(&station.division)
    .bind(&station.section)
    .bind(&station.earnings_range)
    .bind(&station.passenger_range)
    .bind(station.passenger_footfall)
    .bind(&station.platform_type)
    .bind(station.number_of_platforms)
    .execute(executor)
    .await?;
    Ok(())
}

// ============================================================
// Amenity snapshots
// ============================================================

pub async fn fetch_amenity_snapshot(
    pool: &SqlitePool,
    code: &str,
) -> Result<Option<StationAmenitySnapshot>, ApiError> {
    let row: Option<DbAmenities> = sqlx::query_as(
        "SELECT station_code, fields_json FROM station_amenities WHERE station_code = ? COLLATE NOCASE",
    )
    .bind(code.trim())
    .fetch_optional(pool)
    .await?;

    row.map(|row| -> Result<StationAmenitySnapshot, ApiError> {
        let fields: BTreeMap<String, FieldValue> = serde_json::from_str(&row.fields_json)
            .map_err(|e| ApiError::Internal(e.into()))?;
        Ok(StationAmenitySnapshot {
            station_code: row.station_code,
            fields,
        })
    })
    .transpose()
}

pub async fn upsert_amenity_snapshot<'e, E>(
    executor: E,
    snapshot: &StationAmenitySnapshot,
) -> Result<(), ApiError>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    let fields_json =
        serde_json::to_string(&snapshot.fields).map_err(|e| ApiError::Internal(e.into()))?;

    sqlx::query(
        r#"
        INSERT INTO station_amenities (station_code, fields_json, updated_at)
        VALUES (?, ?, ?)
        ON CONFLICT(station_code) DO UPDATE SET
            fields_json = excluded.fields_json,
            updated_at = excluded.updated_at
        "#,
    )
    .bind(station_key(&snapshot.station_code))
    .bind(&fields_json)
    .bind(Utc::now().to_rfc3339())
    .execute(executor)
    .await?;
    Ok(())
}

// ============================================================
// Work orders
// ============================================================

/// All stored works, ordered by project id, that match `filter`
pub async fn fetch_work_orders(
    pool: &SqlitePool,
    filter: &WorkFilter,
) -> Result<Vec<WorkOrder>, sqlx::Error> {
    let rows: Vec<DbWorkOrder> = sqlx::query_as(&format!(
        "SELECT {} FROM works ORDER BY project_id",
        WORK_COLUMNS
    ))
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(WorkOrder::from)
        .filter(|w| filter.matches(w))
        .collect())
}

pub async fn fetch_work_order(
    pool: &SqlitePool,
    project_id: &str,
) -> Result<Option<WorkOrder>, sqlx::Error> {
    let row: Option<DbWorkOrder> = sqlx::query_as(&format!(
        "SELECT {} FROM works WHERE project_id = ?",
        WORK_COLUMNS
    ))
    .bind(project_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(WorkOrder::from))
}

pub async fn project_ids(pool: &SqlitePool) -> Result<HashSet<String>, sqlx::Error> {
    let ids: Vec<(String,)> = sqlx::query_as("SELECT project_id FROM works")
        .fetch_all(pool)
        .await?;
    Ok(ids.into_iter().map(|(id,)| id).collect())
}

/// Insert-or-ignore; returns false when the project id already exists
pub async fn insert_work_order<'e, E>(executor: E, work: &WorkOrder) -> Result<bool, sqlx::Error>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query(&format!(
        "INSERT OR IGNORE INTO works ({}) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        WORK_COLUMNS
    ))
    .bind(&work.project_id)
    .bind(&work.pending_with)
    .bind(work.year_of_sanction)
    .bind(&work.date_of_sanction)
    .bind(&work.short_name_of_work)
    .bind(&work.block_section)
    .bind(&work.station)
    .bind(&work.allocation)
    .bind(work.cost)
    .bind(work.expenditure_to_date)
    .bind(work.financial_progress_percent)
    .bind(&work.if_umbrella)
    .bind(&work.parent_work)
    .bind(&work.section)
    .bind(&work.remarks)
    .bind(&work.latest_remarks_civil)
    .bind(&work.latest_remarks_electrical)
    .bind(&work.latest_remarks_s_t)
    .bind(&work.latest_remarks_civil_as_on)
    .execute(executor)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Overwrite every editable column of an existing work
pub async fn update_work_order(pool: &SqlitePool, work: &WorkOrder) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE works SET
            pending_with = ?, year_of_sanction = ?, date_of_sanction = ?,
            short_name_of_work = ?, block_section = ?, station = ?, allocation = ?,
            cost = ?, expenditure_to_date = ?, financial_progress_percent = ?,
            if_umbrella = ?, parent_work = ?, section = ?, remarks = ?,
            latest_remarks_civil = ?, latest_remarks_electrical = ?,
            latest_remarks_s_t = ?, latest_remarks_civil_as_on = ?
        WHERE project_id = ?
        "#,
    )
    .bind(&work.pending_with)
    .bind(work.year_of_sanction)
    .bind(&work.date_of_sanction)
    .bind(&work.short_name_of_work)
    .bind(&work.block_section)
    .bind(&work.station)
    .bind(&work.allocation)
    .bind(work.cost)
    .bind(work.expenditure_to_date)
    .bind(work.financial_progress_percent)
    .bind(&work.if_umbrella)
    .bind(&work.parent_work)
    .bind(&work.section)
    .bind(&work.remarks)
    .bind(&work.latest_remarks_civil)
    .bind(&work.latest_remarks_electrical)
    .bind(&work.latest_remarks_s_t)
    .bind(&work.latest_remarks_civil_as_on)
    .bind(&work.project_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

// ============================================================
// Remarks
// ============================================================

pub async fn add_remark<'e, E>(executor: E, remark: &Remark) -> Result<(), sqlx::Error>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    sqlx::query(
        r#"
        INSERT INTO remarks (date, pending_with, project_id, department, remark)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&remark.date)
    .bind(&remark.pending_with)
    .bind(&remark.project_id)
    .bind(&remark.department)
    .bind(&remark.remark)
    .execute(executor)
    .await?;

    tracing::info!("Added remark for project {}", remark.project_id);
    Ok(())
}

/// Newest first; same-day remarks keep reverse insertion order
pub async fn list_remarks(pool: &SqlitePool) -> Result<Vec<Remark>, sqlx::Error> {
    let rows: Vec<DbRemark> = sqlx::query_as(
        r#"
        SELECT date, pending_with, project_id, department, remark
        FROM remarks
        ORDER BY date DESC, id DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Remark::from).collect())
}
