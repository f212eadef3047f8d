//! Data models for the amenity API

use std::collections::BTreeMap;

use compliance_engine::{DesirableSet, RequirementSet};
use serde::{Deserialize, Serialize};
use shared_types::{
    ComplianceReport, FieldValue, Remark, StationCategory, StationRecord, WorkOrder,
};
use sqlx::FromRow;
use works_tracker::WorksSummaryRow;

/// Station row as stored
#[derive(Debug, Clone, FromRow)]
pub struct DbStation {
    pub station_code: String,
    pub station_name: String,
    pub categorisation: String,
    pub zone: String,
    pub division: String,
    pub section: String,
    pub earnings_range: String,
    pub passenger_range: String,
    pub passenger_footfall: Option<i64>,
    pub platform_type: String,
    pub number_of_platforms: Option<i64>,
}

impl From<DbStation> for StationRecord {
    fn from(row: DbStation) -> Self {
        StationRecord {
            station_code: row.station_code,
            station_name: row.station_name,
            categorisation: row.categorisation,
            zone: row.zone,
            division: row.division,
            section: row.section,
            earnings_range: row.earnings_range,
            passenger_range: row.passenger_range,
            passenger_footfall: row.passenger_footfall,
            platform_type: row.platform_type,
            number_of_platforms: row.number_of_platforms,
        }
    }
}

/// Amenity snapshot row; fields are kept as a JSON object
#[derive(Debug, Clone, FromRow)]
pub struct DbAmenities {
    pub station_code: String,
    pub fields_json: String,
}

/// Work order row as stored
#[derive(Debug, Clone, FromRow)]
pub struct DbWorkOrder {
    pub project_id: String,
    pub pending_with: String,
    pub year_of_sanction: Option<i64>,
    pub date_of_sanction: String,
    pub short_name_of_work: String,
    pub block_section: String,
    pub station: String,
    pub allocation: String,
    pub cost: f64,
    pub expenditure_to_date: f64,
    pub financial_progress_percent: f64,
    pub if_umbrella: String,
    pub parent_work: String,
    pub section: String,
    pub remarks: String,
    pub latest_remarks_civil: String,
    pub latest_remarks_electrical: String,
    pub latest_remarks_s_t: String,
    pub latest_remarks_civil_as_on: String,
}

impl From<DbWorkOrder> for WorkOrder {
    fn from(row: DbWorkOrder) -> Self {
        WorkOrder {
            project_id: row.project_id,
            pending_with: row.pending_with,
            year_of_sanction: row.year_of_sanction,
            date_of_sanction: row.date_of_sanction,
            short_name_of_work: row.short_name_of_work,
            block_section: row.block_section,
            station: row.station,
            allocation: row.allocation,
            cost: row.cost,
            expenditure_to_date: row.expenditure_to_date,
            financial_progress_percent: row.financial_progress_percent,
            if_umbrella: row.if_umbrella,
            parent_work: row.parent_work,
            section: row.section,
            remarks: row.remarks,
            latest_remarks_civil: row.latest_remarks_civil,
            latest_remarks_electrical: row.latest_remarks_electrical,
            latest_remarks_s_t: row.latest_remarks_s_t,
            latest_remarks_civil_as_on: row.latest_remarks_civil_as_on,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct DbRemark {
    pub date: String,
    pub pending_with: String,
    pub project_id: String,
    pub department: String,
    pub remark: String,
}

impl From<DbRemark> for Remark {
    fn from(row: DbRemark) -> Self {
        Remark {
            date: row.date,
            pending_with: row.pending_with,
            project_id: row.project_id,
            department: row.department,
            remark: row.remark,
        }
    }
}

/// Query string for the station list
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StationQuery {
    pub code: Option<String>,
    pub category: Option<String>,
}

/// Station record with derived presentation fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationResponse {
    #[serde(flatten)]
    pub station: StationRecord,
    pub display_name: String,
    pub category: Option<StationCategory>,
}

impl From<StationRecord> for StationResponse {
    fn from(station: StationRecord) -> Self {
        Self {
            display_name: station.display_name(),
            category: station.category(),
            station,
        }
    }
}

/// Body of `PUT /api/stations/:code/amenities`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AmenitiesRequest {
    pub fields: BTreeMap<String, FieldValue>,
}

/// Both norm sets for one category
#[derive(Debug, Clone, Serialize)]
pub struct NormsResponse {
    pub requested: String,
    pub category: Option<StationCategory>,
    pub minimum_essential: RequirementSet,
    pub desirable: DesirableSet,
}

/// Station, its compliance report and the works touching it
#[derive(Debug, Clone, Serialize)]
pub struct StationComplianceResponse {
    pub station: StationResponse,
    pub report: ComplianceReport,
    pub related_works: Vec<WorkOrder>,
    pub related_works_summary: Vec<WorksSummaryRow>,
}

/// Body of `POST /api/remarks`
#[derive(Debug, Clone, Deserialize)]
pub struct RemarkRequest {
    /// YYYY-MM-DD; today when omitted
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub pending_with: String,
    pub project_id: String,
    #[serde(default)]
    pub department: String,
    pub remark: String,
}
