//! Progress buckets
//!
//! Thresholds are inclusive lower bounds checked from the top: 100, 50, 25.
//! Anything else, NaN included, is work in progress.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressBucket {
    /// p >= 100
    CompletedPendingClosingBill,
    /// 50 <= p < 100
    TenderToBeCalled,
    /// 25 <= p < 50
    TenderUnderFinalisation,
    WorkInProgress,
}

impl ProgressBucket {
    pub const ALL: [ProgressBucket; 4] = [
        ProgressBucket::CompletedPendingClosingBill,
        ProgressBucket::TenderToBeCalled,
        ProgressBucket::TenderUnderFinalisation,
        ProgressBucket::WorkInProgress,
    ];

    pub fn classify(progress: f64) -> Self {
        if progress >= 100.0 {
            ProgressBucket::CompletedPendingClosingBill
        } else if progress >= 50.0 {
            ProgressBucket::TenderToBeCalled
        } else if progress >= 25.0 {
            ProgressBucket::TenderUnderFinalisation
        } else {
            ProgressBucket::WorkInProgress
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProgressBucket::CompletedPendingClosingBill => "Completed - Pending Closing Bill",
            ProgressBucket::TenderToBeCalled => "Tender to be Called",
            ProgressBucket::TenderUnderFinalisation => "Tender Under Finalisation",
            ProgressBucket::WorkInProgress => "Work in Progress",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(
            ProgressBucket::classify(100.0),
            ProgressBucket::CompletedPendingClosingBill
        );
        assert_eq!(
            ProgressBucket::classify(150.0),
            ProgressBucket::CompletedPendingClosingBill
        );
        assert_eq!(ProgressBucket::classify(99.99), ProgressBucket::TenderToBeCalled);
        assert_eq!(ProgressBucket::classify(50.0), ProgressBucket::TenderToBeCalled);
        assert_eq!(
            ProgressBucket::classify(49.9),
            ProgressBucket::TenderUnderFinalisation
        );
        assert_eq!(
            ProgressBucket::classify(25.0),
            ProgressBucket::TenderUnderFinalisation
        );
        assert_eq!(ProgressBucket::classify(24.9), ProgressBucket::WorkInProgress);
        assert_eq!(ProgressBucket::classify(0.0), ProgressBucket::WorkInProgress);
        assert_eq!(ProgressBucket::classify(-5.0), ProgressBucket::WorkInProgress);
    }

    #[test]
    fn test_nan_is_work_in_progress() {
        assert_eq!(
            ProgressBucket::classify(f64::NAN),
            ProgressBucket::WorkInProgress
        );
    }
}
