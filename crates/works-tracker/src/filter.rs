use serde::{Deserialize, Serialize};
use shared_types::WorkOrder;

/// Work order search criteria; every set field must match
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkFilter {
    pub pending_with: Option<String>,
    /// Matches when any station of the work equals this code
    pub station: Option<String>,
    pub year: Option<i64>,
    pub section: Option<String>,
    /// Case-insensitive substring of the short name of work
    pub q: Option<String>,
}

fn set(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl WorkFilter {
    pub fn matches(&self, work: &WorkOrder) -> bool {
        if let Some(pending_with) = set(&self.pending_with) {
            if work.pending_with != pending_with {
                return false;
            }
        }
        if let Some(station) = set(&self.station) {
            if !work.covers_station(station) {
                return false;
            }
        }
        if let Some(year) = self.year {
            if work.year_of_sanction != Some(year) {
                return false;
            }
        }
        if let Some(section) = set(&self.section) {
            if work.section != section {
                return false;
            }
        }
        if let Some(q) = set(&self.q) {
            if !work
                .short_name_of_work
                .to_lowercase()
                .contains(&q.to_lowercase())
            {
                return false;
            }
        }
        true
    }

    pub fn apply<'a>(&self, works: &'a [WorkOrder]) -> Vec<&'a WorkOrder> {
        works.iter().filter(|w| self.matches(w)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<WorkOrder> {
        let mut a = WorkOrder::new("P1", "Sr.DEN/E/SBC");
        a.station = "SBC,YPR".to_string();
        a.year_of_sanction = Some(2022);
        a.section = "SBC-BNC".to_string();
        a.short_name_of_work = "Provision of FOB at SBC".to_string();

        let mut b = WorkOrder::new("P2", "Sr.DEN/W/SBC");
        b.station = "BNC".to_string();
        b.year_of_sanction = Some(2023);
        b.section = "BNC-KJM".to_string();
        b.short_name_of_work = "Platform shelter".to_string();

        vec![a, b]
    }

    #[test]
    fn test_default_matches_everything() {
        assert_eq!(WorkFilter::default().apply(&sample()).len(), 2);
    }

    #[test]
    fn test_station_matches_any_listed() {
        let filter = WorkFilter {
            station: Some("YPR".to_string()),
            ..Default::default()
        };
        let works = sample();
        let found = filter.apply(&works);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].project_id, "P1");
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let filter = WorkFilter {
            q: Some("fob".to_string()),
            ..Default::default()
        };
        assert_eq!(filter.apply(&sample())[0].project_id, "P1");
    }

    #[test]
    fn test_criteria_combine() {
        let filter = WorkFilter {
            pending_with: Some("Sr.DEN/W/SBC".to_string()),
            year: Some(2022),
            ..Default::default()
        };
        assert!(filter.apply(&sample()).is_empty());
    }

    #[test]
    fn test_blank_criteria_are_ignored() {
        let filter = WorkFilter {
            section: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(filter.apply(&sample()).len(), 2);
    }
}
