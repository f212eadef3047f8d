//! Bulk import of work orders
//!
//! Rows arrive in the shape of the divisional works spreadsheets: column
//! headers such as `PROJECTID` or `Financial Progress in %` are accepted as
//! aliases, and numeric cells may be numbers, numeric text or blank.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use shared_types::{FieldValue, WorkOrder};
use tracing::{debug, info, warn};

use crate::error::WorkOrderError;
use crate::validation::validate;

/// One spreadsheet row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkOrderRecord {
    #[serde(alias = "PROJECTID", alias = "Project ID")]
    pub project_id: FieldValue,
    #[serde(alias = "Year of Sanction")]
    pub year_of_sanction: FieldValue,
    #[serde(alias = "Date of Sanction")]
    pub date_of_sanction: FieldValue,
    #[serde(alias = "Short Name of Work")]
    pub short_name_of_work: FieldValue,
    #[serde(alias = "Block Section")]
    pub block_section: FieldValue,
    #[serde(alias = "Station")]
    pub station: FieldValue,
    #[serde(alias = "ALLOCATION")]
    pub allocation: FieldValue,
    #[serde(alias = "Cost")]
    pub cost: FieldValue,
    #[serde(alias = "Expenditure upto date")]
    pub expenditure_to_date: FieldValue,
    #[serde(alias = "Financial Progress in %")]
    pub financial_progress_percent: FieldValue,
    #[serde(alias = "IF UMBRELLA?")]
    pub if_umbrella: FieldValue,
    #[serde(alias = "PARENT WORK")]
    pub parent_work: FieldValue,
    #[serde(alias = "Section")]
    pub section: FieldValue,
    #[serde(alias = "Remarks")]
    pub remarks: FieldValue,
    #[serde(alias = "Latest Remarks Civil")]
    pub latest_remarks_civil: FieldValue,
    #[serde(alias = "Latest Remarks Electrical")]
    pub latest_remarks_electrical: FieldValue,
    #[serde(alias = "Latest Remarks S&T")]
    pub latest_remarks_s_t: FieldValue,
    #[serde(alias = "Latest Remarks Civil As On (DD-MM-YYYY)")]
    pub latest_remarks_civil_as_on: FieldValue,
}

/// Blank cells read as 0; anything else must parse
fn amount(field: &'static str, value: &FieldValue) -> Result<f64, WorkOrderError> {
    if value.is_blank() {
        return Ok(0.0);
    }
    value.to_f64().ok_or_else(|| WorkOrderError::NotANumber {
        field,
        raw: value.as_text(),
    })
}

fn year(value: &FieldValue) -> Result<Option<i64>, WorkOrderError> {
    if value.is_blank() {
        return Ok(None);
    }
    match value.to_f64() {
        Some(y) if y.fract() == 0.0 => Ok(Some(y as i64)),
        _ => Err(WorkOrderError::NotANumber {
            field: "year_of_sanction",
            raw: value.as_text(),
        }),
    }
}

/// Integral numbers lose the ".0" the spreadsheet export adds
fn text(value: &FieldValue) -> String {
    match value {
        FieldValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => format!("{}", *n as i64),
        other => other.as_text(),
    }
}

impl WorkOrderRecord {
    /// Convert to a validated work order pending with `pending_with`
    pub fn into_work_order(self, pending_with: &str) -> Result<WorkOrder, WorkOrderError> {
        let work = WorkOrder {
            project_id: text(&self.project_id),
            pending_with: pending_with.trim().to_string(),
            year_of_sanction: year(&self.year_of_sanction)?,
            date_of_sanction: text(&self.date_of_sanction),
            short_name_of_work: text(&self.short_name_of_work),
            block_section: text(&self.block_section),
            station: text(&self.station),
            allocation: text(&self.allocation),
            cost: amount("cost", &self.cost)?,
            expenditure_to_date: amount("expenditure_to_date", &self.expenditure_to_date)?,
            financial_progress_percent: amount(
                "financial_progress_percent",
                &self.financial_progress_percent,
            )?,
            if_umbrella: text(&self.if_umbrella),
            parent_work: text(&self.parent_work),
            section: text(&self.section),
            remarks: text(&self.remarks),
            latest_remarks_civil: text(&self.latest_remarks_civil),
            latest_remarks_electrical: text(&self.latest_remarks_electrical),
            latest_remarks_s_t: text(&self.latest_remarks_s_t),
            latest_remarks_civil_as_on: text(&self.latest_remarks_civil_as_on),
        };
        validate(&work)?;
        Ok(work)
    }
}

/// Rows pending with one authority, e.g. "Sr.DEN/E/SBC"
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportBatch {
    pub pending_with: String,
    #[serde(default)]
    pub rows: Vec<WorkOrderRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedRow {
    pub pending_with: String,
    /// Zero-based row index within its batch
    pub row: usize,
    pub project_id: String,
    pub reason: String,
}

/// Counts reported back to the uploader
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportOutcome {
    pub accepted: usize,
    pub skipped_duplicates: usize,
    pub rejected: Vec<RejectedRow>,
}

/// Work orders ready to store plus the outcome to report
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportPlan {
    pub accepted: Vec<WorkOrder>,
    pub outcome: ImportOutcome,
}

/// Validate and de-duplicate batches
///
/// `is_known` tells whether a project id is already stored. Duplicates,
/// whether stored or repeated across the upload, are skipped rather than
/// rejected; the first occurrence wins.
pub fn plan_import(batches: Vec<ImportBatch>, is_known: impl Fn(&str) -> bool) -> ImportPlan {
    let mut plan = ImportPlan::default();
    let mut seen: HashSet<String> = HashSet::new();

    for batch in batches {
        debug!(
            pending_with = %batch.pending_with,
            rows = batch.rows.len(),
            "Planning import batch"
        );
        for (row, record) in batch.rows.into_iter().enumerate() {
            let raw_id = text(&record.project_id);
            match record.into_work_order(&batch.pending_with) {
                Ok(work) => {
                    if is_known(&work.project_id) || !seen.insert(work.project_id.clone()) {
                        debug!(project_id = %work.project_id, "Skipping duplicate work");
                        plan.outcome.skipped_duplicates += 1;
                        continue;
                    }
                    plan.accepted.push(work);
                }
                Err(e) => {
                    warn!(
                        pending_with = %batch.pending_with,
                        row,
                        project_id = %raw_id,
                        "Rejected work row: {}",
                        e
                    );
                    plan.outcome.rejected.push(RejectedRow {
                        pending_with: batch.pending_with.clone(),
                        row,
                        project_id: raw_id,
                        reason: e.to_string(),
                    });
                }
            }
        }
    }

    plan.outcome.accepted = plan.accepted.len();
    info!(
        accepted = plan.outcome.accepted,
        skipped = plan.outcome.skipped_duplicates,
        rejected = plan.outcome.rejected.len(),
        "Import planned"
    );
    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn batch(json: &str) -> ImportBatch {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_spreadsheet_headers_are_accepted() {
        let b = batch(
            r#"{
                "pending_with": "Sr.DEN/E/SBC",
                "rows": [{
                    "PROJECTID": 1234567,
                    "Year of Sanction": "2021",
                    "Short Name of Work": "Raising of PF 2",
                    "Station": "SBC,YPR",
                    "Cost": "250.5",
                    "Expenditure upto date": 80,
                    "Financial Progress in %": "32",
                    "Latest Remarks S&T": "Cabling done"
                }]
            }"#,
        );
        let plan = plan_import(vec![b], |_| false);

        assert_eq!(plan.outcome.accepted, 1);
        let work = &plan.accepted[0];
        assert_eq!(work.project_id, "1234567");
        assert_eq!(work.pending_with, "Sr.DEN/E/SBC");
        assert_eq!(work.year_of_sanction, Some(2021));
        assert_eq!(work.cost, 250.5);
        assert_eq!(work.expenditure_to_date, 80.0);
        assert_eq!(work.financial_progress_percent, 32.0);
        assert_eq!(work.latest_remarks_s_t, "Cabling done");
        assert!(work.covers_station("YPR"));
    }

    #[test]
    fn test_blank_numeric_cells_are_zero() {
        let b = batch(
            r#"{"pending_with": "Divisional Works",
                "rows": [{"PROJECTID": "P-1", "Cost": "", "Financial Progress in %": null}]}"#,
        );
        let plan = plan_import(vec![b], |_| false);
        assert_eq!(plan.accepted[0].cost, 0.0);
        assert_eq!(plan.accepted[0].financial_progress_percent, 0.0);
        assert_eq!(plan.accepted[0].year_of_sanction, None);
    }

    #[test]
    fn test_invalid_rows_are_rejected_with_reason() {
        let b = batch(
            r#"{"pending_with": "Sr.DCM/SBC", "rows": [
                {"PROJECTID": "", "Cost": 1},
                {"PROJECTID": "P-2", "Cost": "lots"},
                {"PROJECTID": "P-3", "Financial Progress in %": 180},
                {"PROJECTID": "P-4"}
            ]}"#,
        );
        let plan = plan_import(vec![b], |_| false);

        assert_eq!(plan.outcome.accepted, 1);
        assert_eq!(plan.outcome.rejected.len(), 3);
        assert_eq!(plan.outcome.rejected[1].row, 1);
        assert_eq!(plan.outcome.rejected[1].project_id, "P-2");
        assert!(plan.outcome.rejected[1].reason.contains("cost"));
    }

    #[test]
    fn test_duplicates_are_skipped() {
        let first = batch(r#"{"pending_with": "A", "rows": [{"PROJECTID": "P-1"}, {"PROJECTID": "P-2"}]}"#);
        let second = batch(r#"{"pending_with": "B", "rows": [{"PROJECTID": "P-2"}, {"PROJECTID": "P-9"}]}"#);

        let plan = plan_import(vec![first, second], |id| id == "P-9");

        assert_eq!(
            plan.accepted.iter().map(|w| w.project_id.as_str()).collect::<Vec<_>>(),
            vec!["P-1", "P-2"]
        );
        assert_eq!(plan.accepted[1].pending_with, "A");
        assert_eq!(plan.outcome.skipped_duplicates, 2);
    }

    #[test]
    fn test_snake_case_keys_also_work() {
        let b = batch(
            r#"{"pending_with": "A", "rows": [{"project_id": "P-7", "financial_progress_percent": 75}]}"#,
        );
        let plan = plan_import(vec![b], |_| false);
        assert_eq!(plan.accepted[0].financial_progress_percent, 75.0);
    }
}
