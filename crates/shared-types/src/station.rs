use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::category::StationCategory;
use crate::field::FieldValue;

/// Station master record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationRecord {
    pub station_code: String,
    pub station_name: String,
    /// Raw categorisation as recorded, e.g. "NSG-3"
    #[serde(default)]
    pub categorisation: String,
    #[serde(default)]
    pub zone: String,
    #[serde(default)]
    pub division: String,
    #[serde(default)]
    pub section: String,
    #[serde(default)]
    pub earnings_range: String,
    #[serde(default)]
    pub passenger_range: String,
    #[serde(default)]
    pub passenger_footfall: Option<i64>,
    #[serde(default)]
    pub platform_type: String,
    #[serde(default)]
    pub number_of_platforms: Option<i64>,
}

impl StationRecord {
    pub fn new(code: impl Into<String>, name: impl Into<String>, categorisation: &str) -> Self {
        Self {
            station_code: code.into(),
            station_name: name.into(),
            categorisation: categorisation.to_string(),
            zone: String::new(),
            division: String::new(),
            section: String::new(),
            earnings_range: String::new(),
            passenger_range: String::new(),
            passenger_footfall: None,
            platform_type: String::new(),
            number_of_platforms: None,
        }
    }

    pub fn category(&self) -> Option<StationCategory> {
        StationCategory::parse(&self.categorisation)
    }

    /// "STATION NAME (CODE)"
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.station_name, self.station_code)
    }
}

/// Recorded facility data for one station
///
/// Keys are amenity field names (`urinals_count`, `wifi`, ...). The snapshot
/// is never mutated by evaluation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StationAmenitySnapshot {
    pub station_code: String,
    #[serde(default)]
    pub fields: BTreeMap<String, FieldValue>,
}

impl StationAmenitySnapshot {
    pub fn new(station_code: impl Into<String>) -> Self {
        Self {
            station_code: station_code.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn with(mut self, field: &str, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(field.to_string(), value.into());
        self
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    /// Recorded count for an amenity: `{amenity}_count` first, then the raw field
    pub fn count_for(&self, amenity: &str) -> Option<&FieldValue> {
        self.fields
            .get(&format!("{}_count", amenity))
            .or_else(|| self.fields.get(amenity))
    }
}
