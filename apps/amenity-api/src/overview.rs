//! Station overview analytics

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use shared_types::StationRecord;

const UNSPECIFIED: &str = "Unspecified";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountEntry {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionSummary {
    pub section: String,
    pub stations: usize,
    pub most_common_category: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StationOverview {
    pub total_stations: usize,
    pub distinct_categories: usize,
    pub distinct_zones: usize,
    pub distinct_sections: usize,
    pub by_category: Vec<CountEntry>,
    pub by_zone: Vec<CountEntry>,
    pub sections: Vec<SectionSummary>,
}

/// Canonical code when the category is known, else the trimmed raw value
fn category_key(station: &StationRecord) -> String {
    match station.category() {
        Some(category) => category.code().to_string(),
        None => label(&station.categorisation),
    }
}

fn label(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        UNSPECIFIED.to_string()
    } else {
        raw.to_string()
    }
}

/// Count desc, then name asc
fn distribution(counts: BTreeMap<String, usize>) -> Vec<CountEntry> {
    let mut entries: Vec<CountEntry> = counts
        .into_iter()
        .map(|(name, count)| CountEntry { name, count })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    entries
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .len()
}

pub fn summarize_stations(stations: &[StationRecord]) -> StationOverview {
    let mut by_category: BTreeMap<String, usize> = BTreeMap::new();
    let mut by_zone: BTreeMap<String, usize> = BTreeMap::new();
    let mut by_section: BTreeMap<String, BTreeMap<String, usize>> = BTreeMap::new();

    for station in stations {
        let category = category_key(station);
        *by_category.entry(category.clone()).or_default() += 1;
        *by_zone.entry(label(&station.zone)).or_default() += 1;
        *by_section
            .entry(label(&station.section))
            .or_default()
            .entry(category)
            .or_default() += 1;
    }

    let sections = by_section
        .into_iter()
        .map(|(section, categories)| {
            let station_count: usize = categories.values().sum();
            // BTreeMap order makes the first maximum the alphabetical one
            let most_common_category = categories
                .iter()
                .fold(None::<(&String, usize)>, |best, (name, count)| match best {
                    Some((_, top)) if top >= *count => best,
                    _ => Some((name, *count)),
                })
                .map(|(name, _)| name.clone())
                .unwrap_or_default();
            SectionSummary {
                section,
                stations: station_count,
                most_common_category,
            }
        })
        .collect();

    let distinct_categories = by_category
        .keys()
        .filter(|k| k.as_str() != UNSPECIFIED)
        .count();

    StationOverview {
        total_stations: stations.len(),
        distinct_categories,
        distinct_zones: distinct(stations.iter().map(|s| s.zone.as_str())),
        distinct_sections: distinct(stations.iter().map(|s| s.section.as_str())),
        by_category: distribution(by_category),
        by_zone: distribution(by_zone),
        sections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn station(code: &str, category: &str, zone: &str, section: &str) -> StationRecord {
        let mut s = StationRecord::new(code, code, category);
        s.zone = zone.to_string();
        s.section = section.to_string();
        s
    }

    #[test]
    fn test_empty() {
        assert_eq!(summarize_stations(&[]), StationOverview::default());
    }

    #[test]
    fn test_distributions_sorted_by_count_then_name() {
        let stations = vec![
            station("A", "NSG-5", "SWR", "SBC-BNC"),
            station("B", "NSG5", "SWR", "SBC-BNC"),
            station("C", "HG-1", "SR", "SBC-BNC"),
            station("D", "NSG-3", "SWR", "BNC-KJM"),
        ];

        let overview = summarize_stations(&stations);

        assert_eq!(overview.total_stations, 4);
        assert_eq!(overview.distinct_zones, 2);
        assert_eq!(overview.distinct_sections, 2);
        assert_eq!(
            overview.by_category,
            vec![
                CountEntry { name: "NSG5".into(), count: 2 },
                CountEntry { name: "HG1".into(), count: 1 },
                CountEntry { name: "NSG3".into(), count: 1 },
            ]
        );
        assert_eq!(overview.by_zone[0], CountEntry { name: "SWR".into(), count: 3 });
    }

    #[test]
    fn test_section_most_common_category_ties_alphabetical() {
        let stations = vec![
            station("A", "NSG-6", "SWR", "S1"),
            station("B", "HG-2", "SWR", "S1"),
            station("C", "NSG-4", "SWR", "S2"),
            station("D", "NSG-4", "SWR", "S2"),
            station("E", "HG-1", "SWR", "S2"),
        ];

        let overview = summarize_stations(&stations);

        assert_eq!(
            overview.sections,
            vec![
                SectionSummary {
                    section: "S1".into(),
                    stations: 2,
                    most_common_category: "HG2".into(),
                },
                SectionSummary {
                    section: "S2".into(),
                    stations: 3,
                    most_common_category: "NSG4".into(),
                },
            ]
        );
    }

    #[test]
    fn test_blank_values_are_unspecified() {
        let overview = summarize_stations(&[station("A", "", "", "")]);
        assert_eq!(overview.by_category[0].name, UNSPECIFIED);
        assert_eq!(overview.distinct_categories, 0);
        assert_eq!(overview.sections[0].section, UNSPECIFIED);
    }
}
