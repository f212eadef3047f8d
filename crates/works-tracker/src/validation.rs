use shared_types::WorkOrder;

use crate::error::WorkOrderError;

/// Check a work order before it is stored
pub fn validate(work: &WorkOrder) -> Result<(), WorkOrderError> {
    if work.project_id.trim().is_empty() {
        return Err(WorkOrderError::EmptyProjectId);
    }

    let progress = work.financial_progress_percent;
    if !(0.0..=100.0).contains(&progress) {
        return Err(WorkOrderError::ProgressOutOfRange(progress));
    }

    for (field, value) in [
        ("cost", work.cost),
        ("expenditure_to_date", work.expenditure_to_date),
    ] {
        if value < 0.0 || !value.is_finite() {
            return Err(WorkOrderError::NegativeAmount { field, value });
        }
    }

    Ok(())
}
