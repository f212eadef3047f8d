pub mod evaluator;
pub mod norms;

use std::sync::Arc;

use shared_types::{
    ComplianceReport, ComplianceTally, ComplianceVerdict, StationAmenitySnapshot, StationRecord,
};

pub use evaluator::ComplianceEvaluator;
pub use norms::{DesirableSet, NormsCatalog, RequirementSet};

/// ComplianceEngine entry point
///
/// Holds the norms catalog behind an `Arc` so request handlers can share one
/// immutable table.
#[derive(Debug, Clone)]
pub struct ComplianceEngine {
    catalog: Arc<NormsCatalog>,
}

impl ComplianceEngine {
    pub fn new(catalog: Arc<NormsCatalog>) -> Self {
        Self { catalog }
    }

    /// Engine over the Railway Board norms
    pub fn standard() -> Self {
        Self::new(Arc::new(NormsCatalog::standard()))
    }

    pub fn catalog(&self) -> &NormsCatalog {
        &self.catalog
    }

    pub fn evaluate(
        &self,
        category: &str,
        snapshot: &StationAmenitySnapshot,
    ) -> Vec<ComplianceVerdict> {
        ComplianceEvaluator::new(&self.catalog).evaluate(category, snapshot)
    }

    /// Full report for a station
    ///
    /// A station without a recorded snapshot gets no verdicts; the report
    /// still says whether norms exist for its category.
    pub fn check_station(
        &self,
        station: &StationRecord,
        snapshot: Option<&StationAmenitySnapshot>,
    ) -> ComplianceReport {
        let category = station.category();
        let norms_defined = !self
            .catalog
            .get_minimum_amenities(&station.categorisation)
            .is_empty()
            || !self
                .catalog
                .get_desirable_amenities(&station.categorisation)
                .is_empty();

        let verdicts = snapshot
            .map(|s| self.evaluate(&station.categorisation, s))
            .unwrap_or_default();
        let tally = ComplianceTally::from_verdicts(&verdicts);

        ComplianceReport {
            station_code: station.station_code.clone(),
            categorisation: station.categorisation.clone(),
            category,
            norms_defined,
            snapshot_present: snapshot.is_some(),
            verdicts,
            tally,
        }
    }
}

impl Default for ComplianceEngine {
    fn default() -> Self {
        Self::standard()
    }
}
