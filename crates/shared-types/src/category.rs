//! Station categorisation tiers
//!
//! NSG (non-suburban group) tiers run from NSG1 (busiest) to NSG6; HG tiers
//! cover halt stations.

use serde::{Deserialize, Serialize};

/// Station category tier driving which amenity norms apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StationCategory {
    Nsg1,
    Nsg2,
    Nsg3,
    Nsg4,
    Nsg5,
    Nsg6,
    Hg1,
    Hg2,
    Hg3,
}

impl StationCategory {
    pub const ALL: [StationCategory; 9] = [
        StationCategory::Nsg1,
        StationCategory::Nsg2,
        StationCategory::Nsg3,
        StationCategory::Nsg4,
        StationCategory::Nsg5,
        StationCategory::Nsg6,
        StationCategory::Hg1,
        StationCategory::Hg2,
        StationCategory::Hg3,
    ];

    /// Canonical code without hyphen, e.g. "NSG3"
    pub fn code(&self) -> &'static str {
        match self {
            StationCategory::Nsg1 => "NSG1",
            StationCategory::Nsg2 => "NSG2",
            StationCategory::Nsg3 => "NSG3",
            StationCategory::Nsg4 => "NSG4",
            StationCategory::Nsg5 => "NSG5",
            StationCategory::Nsg6 => "NSG6",
            StationCategory::Hg1 => "HG1",
            StationCategory::Hg2 => "HG2",
            StationCategory::Hg3 => "HG3",
        }
    }

    /// Halt-station tiers have their own, smaller norm set
    pub fn is_halt(&self) -> bool {
        matches!(
            self,
            StationCategory::Hg1 | StationCategory::Hg2 | StationCategory::Hg3
        )
    }

    /// Parse a raw categorisation string ("NSG-3", " hg1 ")
    ///
    /// Hyphens are stripped before matching. Unknown strings return `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = normalize_category(raw);
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.code().eq_ignore_ascii_case(&normalized))
    }
}

impl std::fmt::Display for StationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Normalise a raw categorisation string: trim and strip every `-`
pub fn normalize_category(raw: &str) -> String {
    raw.trim().chars().filter(|c| *c != '-').collect()
}
