//! Works summary per pending authority

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use shared_types::WorkOrder;

use crate::bucket::ProgressBucket;

pub const TOTAL_ROW_LABEL: &str = "Total Works";

/// One row of the works summary table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorksSummaryRow {
    pub pending_with: String,
    pub total_works: u32,
    pub completed_pending_closing_bill: u32,
    pub tender_to_be_called: u32,
    pub tender_under_finalisation: u32,
    pub work_in_progress: u32,
}

impl WorksSummaryRow {
    fn named(pending_with: &str) -> Self {
        Self {
            pending_with: pending_with.to_string(),
            ..Self::default()
        }
    }

    fn record(&mut self, bucket: ProgressBucket) {
        self.total_works += 1;
        match bucket {
            ProgressBucket::CompletedPendingClosingBill => self.completed_pending_closing_bill += 1,
            ProgressBucket::TenderToBeCalled => self.tender_to_be_called += 1,
            ProgressBucket::TenderUnderFinalisation => self.tender_under_finalisation += 1,
            ProgressBucket::WorkInProgress => self.work_in_progress += 1,
        }
    }

    fn absorb(&mut self, other: &WorksSummaryRow) {
        self.total_works += other.total_works;
        self.completed_pending_closing_bill += other.completed_pending_closing_bill;
        self.tender_to_be_called += other.tender_to_be_called;
        self.tender_under_finalisation += other.tender_under_finalisation;
        self.work_in_progress += other.work_in_progress;
    }

    pub fn count(&self, bucket: ProgressBucket) -> u32 {
        match bucket {
            ProgressBucket::CompletedPendingClosingBill => self.completed_pending_closing_bill,
            ProgressBucket::TenderToBeCalled => self.tender_to_be_called,
            ProgressBucket::TenderUnderFinalisation => self.tender_under_finalisation,
            ProgressBucket::WorkInProgress => self.work_in_progress,
        }
    }

    pub fn is_total(&self) -> bool {
        self.pending_with == TOTAL_ROW_LABEL
    }
}

/// Group works by pending authority and bucket them by financial progress
///
/// Rows are sorted by authority and followed by a "Total Works" row. An empty
/// input yields only the zeroed total row.
pub fn summarize(work_orders: &[WorkOrder]) -> Vec<WorksSummaryRow> {
    let mut groups: BTreeMap<&str, WorksSummaryRow> = BTreeMap::new();

    for work in work_orders {
        groups
            .entry(work.pending_with.as_str())
            .or_insert_with(|| WorksSummaryRow::named(&work.pending_with))
            .record(ProgressBucket::classify(work.financial_progress_percent));
    }

    let mut total = WorksSummaryRow::named(TOTAL_ROW_LABEL);
    let mut rows: Vec<WorksSummaryRow> = groups.into_values().collect();
    for row in &rows {
        total.absorb(row);
    }
    rows.push(total);
    rows
}
