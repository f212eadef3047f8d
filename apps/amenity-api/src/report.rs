//! Station compliance report assembly
//!
//! Joins the station record, its compliance verdicts and the works that
//! touch the station. Assembly is pure; loading happens in the handler.

use compliance_engine::ComplianceEngine;
use shared_types::{StationAmenitySnapshot, StationRecord, WorkOrder};
use works_tracker::{related_works, summarize};

use crate::models::{StationComplianceResponse, StationResponse};

pub struct ReportAssembler<'a> {
    engine: &'a ComplianceEngine,
}

impl<'a> ReportAssembler<'a> {
    pub fn new(engine: &'a ComplianceEngine) -> Self {
        Self { engine }
    }

    pub fn assemble(
        &self,
        station: StationRecord,
        snapshot: Option<&StationAmenitySnapshot>,
        works: &[WorkOrder],
    ) -> StationComplianceResponse {
        let report = self.engine.check_station(&station, snapshot);
        let related: Vec<WorkOrder> = related_works(works, &station.station_code)
            .into_iter()
            .cloned()
            .collect();
        let related_works_summary = summarize(&related);

        StationComplianceResponse {
            station: StationResponse::from(station),
            report,
            related_works: related,
            related_works_summary,
        }
    }
}
