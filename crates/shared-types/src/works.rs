use serde::{Deserialize, Serialize};

/// A sanctioned infrastructure work
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkOrder {
    /// Unique project identifier (PROJECTID)
    pub project_id: String,
    /// Authority the work is currently pending with, e.g. "Sr.DEN/E/SBC"
    #[serde(default)]
    pub pending_with: String,
    #[serde(default)]
    pub year_of_sanction: Option<i64>,
    #[serde(default)]
    pub date_of_sanction: String,
    #[serde(default)]
    pub short_name_of_work: String,
    #[serde(default)]
    pub block_section: String,
    /// Comma separated station codes
    #[serde(default)]
    pub station: String,
    #[serde(default)]
    pub allocation: String,
    #[serde(default)]
    pub cost: f64,
    #[serde(default)]
    pub expenditure_to_date: f64,
    /// Financial progress, 0..=100
    #[serde(default)]
    pub financial_progress_percent: f64,
    #[serde(default)]
    pub if_umbrella: String,
    #[serde(default)]
    pub parent_work: String,
    #[serde(default)]
    pub section: String,
    #[serde(default)]
    pub remarks: String,
    #[serde(default)]
    pub latest_remarks_civil: String,
    #[serde(default)]
    pub latest_remarks_electrical: String,
    #[serde(default)]
    pub latest_remarks_s_t: String,
    #[serde(default)]
    pub latest_remarks_civil_as_on: String,
}

impl WorkOrder {
    pub fn new(project_id: impl Into<String>, pending_with: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            pending_with: pending_with.into(),
            year_of_sanction: None,
            date_of_sanction: String::new(),
            short_name_of_work: String::new(),
            block_section: String::new(),
            station: String::new(),
            allocation: String::new(),
            cost: 0.0,
            expenditure_to_date: 0.0,
            financial_progress_percent: 0.0,
            if_umbrella: String::new(),
            parent_work: String::new(),
            section: String::new(),
            remarks: String::new(),
            latest_remarks_civil: String::new(),
            latest_remarks_electrical: String::new(),
            latest_remarks_s_t: String::new(),
            latest_remarks_civil_as_on: String::new(),
        }
    }

    pub fn with_progress(mut self, percent: f64) -> Self {
        self.financial_progress_percent = percent;
        self
    }

    /// Station codes the work covers
    pub fn stations(&self) -> impl Iterator<Item = &str> {
        self.station
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    pub fn covers_station(&self, code: &str) -> bool {
        self.stations().any(|s| s.eq_ignore_ascii_case(code.trim()))
    }
}

/// Dated note against a work
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Remark {
    /// ISO date, YYYY-MM-DD
    pub date: String,
    #[serde(default)]
    pub pending_with: String,
    pub project_id: String,
    #[serde(default)]
    pub department: String,
    pub remark: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stations_split_and_trim() {
        let mut work = WorkOrder::new("PID-1", "Sr.DEN/E/SBC");
        work.station = "SBC, YPR ,,BNC".to_string();
        let stations: Vec<&str> = work.stations().collect();
        assert_eq!(stations, vec!["SBC", "YPR", "BNC"]);
        assert!(work.covers_station("ypr"));
        assert!(!work.covers_station("KJM"));
    }

    #[test]
    fn test_empty_station_list() {
        let work = WorkOrder::new("PID-2", "Sr.DCM/SBC");
        assert_eq!(work.stations().count(), 0);
        assert!(!work.covers_station(""));
    }
}
