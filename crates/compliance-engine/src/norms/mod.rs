//! Amenity norms per station category
//!
//! Norms come in two independent namespaces:
//! 1. Minimum essential - mandatory, quantity or prose
//! 2. Desirable - recommended, yes/no only
//!
//! NSG2..NSG6 are NSG1 with per-tier overrides (see [`nsg`]); halt stations
//! have their own sets (see [`halt`]).

pub mod desirable;
pub mod halt;
pub mod nsg;

use std::collections::HashMap;

use serde::ser::{Serialize, Serializer};
use shared_types::{AmenityRequirement, StationCategory};

/// Insertion-ordered amenity -> requirement mapping
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequirementSet {
    entries: Vec<(String, AmenityRequirement)>,
}

impl RequirementSet {
    pub const fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn from_entries(entries: Vec<(&str, AmenityRequirement)>) -> Self {
        let mut set = Self::empty();
        for (name, requirement) in entries {
            set.upsert(name, requirement);
        }
        set
    }

    /// Copy of this set with overrides applied
    ///
    /// An override replaces an existing amenity in place; unknown amenities
    /// are appended. `self` is left untouched.
    pub fn with_overrides(&self, overrides: Vec<(&str, AmenityRequirement)>) -> Self {
        let mut derived = self.clone();
        for (name, requirement) in overrides {
            derived.upsert(name, requirement);
        }
        derived
    }

    fn upsert(&mut self, name: &str, requirement: AmenityRequirement) {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some(slot) => slot.1 = requirement,
            None => self.entries.push((name.to_string(), requirement)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&AmenityRequirement> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, r)| r)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AmenityRequirement)> {
        self.entries.iter().map(|(n, r)| (n.as_str(), r))
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for RequirementSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Insertion-ordered amenity -> recommended flag mapping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DesirableSet {
    entries: Vec<(String, bool)>,
}

impl DesirableSet {
    pub const fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Every listed amenity flagged as recommended
    pub fn recommending(names: &[&str]) -> Self {
        Self {
            entries: names.iter().map(|n| (n.to_string(), true)).collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<bool> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, f)| *f)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries.iter().map(|(n, f)| (n.as_str(), *f))
    }

    /// Amenities flagged `true`, in catalog order
    pub fn recommended(&self) -> impl Iterator<Item = &str> {
        self.iter().filter(|(_, f)| *f).map(|(n, _)| n)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for DesirableSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

static NO_MINIMUM: RequirementSet = RequirementSet::empty();
static NO_DESIRABLE: DesirableSet = DesirableSet::empty();

/// Immutable norms table, built once and shared by reference
#[derive(Debug, Clone, Default)]
pub struct NormsCatalog {
    minimum: HashMap<StationCategory, RequirementSet>,
    desirable: HashMap<StationCategory, DesirableSet>,
}

impl NormsCatalog {
    /// Catalog assembled from explicit sets
    pub fn from_parts(
        minimum: HashMap<StationCategory, RequirementSet>,
        desirable: HashMap<StationCategory, DesirableSet>,
    ) -> Self {
        Self { minimum, desirable }
    }

    /// The Railway Board norms for NSG and HG categories
    pub fn standard() -> Self {
        let mut minimum = HashMap::new();
        let mut desirable = HashMap::new();

        for category in StationCategory::ALL {
            let set = if category.is_halt() {
                halt::minimum_set(category)
            } else {
                nsg::minimum_set(category)
            };
            minimum.insert(category, set);

            let wanted = desirable::desirable_set(category);
            if !wanted.is_empty() {
                desirable.insert(category, wanted);
            }
        }

        Self { minimum, desirable }
    }

    /// Minimum essential norms for a raw category string
    ///
    /// Hyphens are stripped before lookup; unknown categories have no norms.
    pub fn get_minimum_amenities(&self, category: &str) -> &RequirementSet {
        StationCategory::parse(category)
            .map(|c| self.minimum_for(c))
            .unwrap_or(&NO_MINIMUM)
    }

    /// Desirable norms for a raw category string
    pub fn get_desirable_amenities(&self, category: &str) -> &DesirableSet {
        StationCategory::parse(category)
            .map(|c| self.desirable_for(c))
            .unwrap_or(&NO_DESIRABLE)
    }

    pub fn minimum_for(&self, category: StationCategory) -> &RequirementSet {
        self.minimum.get(&category).unwrap_or(&NO_MINIMUM)
    }

    pub fn desirable_for(&self, category: StationCategory) -> &DesirableSet {
        self.desirable.get(&category).unwrap_or(&NO_DESIRABLE)
    }

    /// Categories with at least one norm, in tier order
    pub fn categories(&self) -> Vec<StationCategory> {
        StationCategory::ALL
            .iter()
            .copied()
            .filter(|c| self.minimum.contains_key(c) || self.desirable.contains_key(c))
            .collect()
    }
}
