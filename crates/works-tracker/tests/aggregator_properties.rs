//! Property-based tests for the works summary

use proptest::prelude::*;
use shared_types::WorkOrder;
use works_tracker::{summarize, ProgressBucket, WorkFilter, TOTAL_ROW_LABEL};

const AUTHORITIES: [&str; 4] = [
    "Sr.DEN/E/SBC",
    "Sr.DEN/W/SBC",
    "Divisional Works",
    "Sr.DCM/SBC",
];

fn work_orders() -> impl Strategy<Value = Vec<WorkOrder>> {
    prop::collection::vec((0usize..AUTHORITIES.len(), -10.0f64..150.0), 0..60).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (a, p))| WorkOrder::new(format!("P{}", i), AUTHORITIES[a]).with_progress(p))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // ============================================================
    // Summary table
    // ============================================================

    #[test]
    fn buckets_sum_to_row_total(works in work_orders()) {
        for row in summarize(&works) {
            let bucketed: u32 = ProgressBucket::ALL.iter().map(|b| row.count(*b)).sum();
            prop_assert_eq!(bucketed, row.total_works);
        }
    }

    #[test]
    fn total_row_sums_authority_rows(works in work_orders()) {
        let rows = summarize(&works);
        let (total, authorities) = rows.split_last().unwrap();

        prop_assert_eq!(&total.pending_with, TOTAL_ROW_LABEL);
        prop_assert_eq!(total.total_works as usize, works.len());
        for bucket in ProgressBucket::ALL {
            let sum: u32 = authorities.iter().map(|r| r.count(bucket)).sum();
            prop_assert_eq!(sum, total.count(bucket));
        }
    }

    #[test]
    fn authority_rows_are_sorted_and_present(works in work_orders()) {
        let rows = summarize(&works);
        let names: Vec<&str> = rows[..rows.len() - 1]
            .iter()
            .map(|r| r.pending_with.as_str())
            .collect();

        let mut sorted = names.clone();
        sorted.sort();
        prop_assert_eq!(&names, &sorted);

        for row in &rows[..rows.len() - 1] {
            prop_assert!(row.total_works > 0);
        }
    }

    #[test]
    fn classification_is_first_match(p in -50.0f64..200.0) {
        let expected = if p >= 100.0 {
            ProgressBucket::CompletedPendingClosingBill
        } else if p >= 50.0 {
            ProgressBucket::TenderToBeCalled
        } else if p >= 25.0 {
            ProgressBucket::TenderUnderFinalisation
        } else {
            ProgressBucket::WorkInProgress
        };
        prop_assert_eq!(ProgressBucket::classify(p), expected);
    }

    // ============================================================
    // Filtering
    // ============================================================

    #[test]
    fn authority_filter_agrees_with_summary(
        works in work_orders(),
        a in 0usize..AUTHORITIES.len(),
    ) {
        let filter = WorkFilter {
            pending_with: Some(AUTHORITIES[a].to_string()),
            ..Default::default()
        };
        let matched = filter.apply(&works).len() as u32;
        let row_total = summarize(&works)
            .iter()
            .find(|r| r.pending_with == AUTHORITIES[a])
            .map(|r| r.total_works)
            .unwrap_or(0);
        prop_assert_eq!(matched, row_total);
    }
}
