//! Sanctioned works tracking
//!
//! Pure functions over `WorkOrder` values: progress bucketing and the
//! per-authority summary, validation, partial edits, filtering and bulk
//! import planning. Storage lives with the caller.

pub mod aggregator;
pub mod bucket;
pub mod error;
pub mod filter;
pub mod import;
pub mod update;
pub mod validation;

pub use aggregator::{summarize, WorksSummaryRow, TOTAL_ROW_LABEL};
pub use bucket::ProgressBucket;
pub use error::WorkOrderError;
pub use filter::WorkFilter;
pub use import::{plan_import, ImportBatch, ImportOutcome, ImportPlan, RejectedRow, WorkOrderRecord};
pub use update::WorkOrderUpdate;
pub use validation::validate;

use shared_types::WorkOrder;

/// Works whose station list includes `station_code`
pub fn related_works<'a>(works: &'a [WorkOrder], station_code: &str) -> Vec<&'a WorkOrder> {
    works
        .iter()
        .filter(|w| w.covers_station(station_code))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_related_works_by_station_list() {
        let mut a = WorkOrder::new("P1", "Sr.DEN/E/SBC");
        a.station = "SBC, BNC".to_string();
        let mut b = WorkOrder::new("P2", "Sr.DEN/E/SBC");
        b.station = "YPR".to_string();
        let works = vec![a, b];

        let related = related_works(&works, "BNC");
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].project_id, "P1");
        assert!(related_works(&works, "KJM").is_empty());
    }
}
