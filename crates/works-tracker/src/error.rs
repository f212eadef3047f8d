use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkOrderError {
    #[error("Project id must not be empty")]
    EmptyProjectId,

    #[error("Financial progress {0} is outside 0..=100")]
    ProgressOutOfRange(f64),

    #[error("{field} must not be negative (got {value})")]
    NegativeAmount { field: &'static str, value: f64 },

    #[error("{field} is not a number: {raw:?}")]
    NotANumber { field: &'static str, raw: String },
}
