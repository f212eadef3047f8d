//! Partial edits of a stored work order

use serde::{Deserialize, Deserializer, Serialize};
use shared_types::WorkOrder;

use crate::error::WorkOrderError;
use crate::validation::validate;

/// Fields an edit may change; `None` leaves the stored value alone
///
/// The project id is not editable. `year_of_sanction` distinguishes an absent
/// key (keep) from an explicit `null` (clear).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkOrderUpdate {
    pub pending_with: Option<String>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub year_of_sanction: Option<Option<i64>>,
    pub date_of_sanction: Option<String>,
    pub short_name_of_work: Option<String>,
    pub block_section: Option<String>,
    pub station: Option<String>,
    pub allocation: Option<String>,
    pub cost: Option<f64>,
    pub expenditure_to_date: Option<f64>,
    pub financial_progress_percent: Option<f64>,
    pub if_umbrella: Option<String>,
    pub parent_work: Option<String>,
    pub section: Option<String>,
    pub remarks: Option<String>,
    pub latest_remarks_civil: Option<String>,
    pub latest_remarks_electrical: Option<String>,
    pub latest_remarks_s_t: Option<String>,
    pub latest_remarks_civil_as_on: Option<String>,
}

/// Wrap any value that is present, `null` included, in `Some`
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

macro_rules! apply_fields {
    ($update:expr, $work:expr, $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = $update.$field {
                $work.$field = value;
            }
        )+
    };
}

impl WorkOrderUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply onto a copy of `current` and validate the result
    pub fn apply(self, current: &WorkOrder) -> Result<WorkOrder, WorkOrderError> {
        let mut work = current.clone();

        apply_fields!(
            self,
            work,
            pending_with,
            year_of_sanction,
            date_of_sanction,
            short_name_of_work,
            block_section,
            station,
            allocation,
            cost,
            expenditure_to_date,
            financial_progress_percent,
            if_umbrella,
            parent_work,
            section,
            remarks,
            latest_remarks_civil,
            latest_remarks_electrical,
            latest_remarks_s_t,
            latest_remarks_civil_as_on,
        );

        validate(&work)?;
        Ok(work)
    }
}
