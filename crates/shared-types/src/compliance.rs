//! Amenity requirements and compliance verdicts

use serde::{Deserialize, Serialize};

/// A single amenity norm
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AmenityRequirement {
    /// Plain quantity, e.g. waiting hall area in sqm
    Numeric { quantity: u32 },
    /// Quantity and/or flags with an explanatory note
    Structured(StructuredRequirement),
    /// Norm expressed only in prose ("As per Board standards")
    Descriptive { text: String },
    /// Yes/no norm. `required: false` marks an amenity explicitly not required
    Presence { required: bool },
}

impl AmenityRequirement {
    pub fn numeric(quantity: u32) -> Self {
        AmenityRequirement::Numeric { quantity }
    }

    pub fn descriptive(text: &str) -> Self {
        AmenityRequirement::Descriptive {
            text: text.to_string(),
        }
    }

    pub fn presence(required: bool) -> Self {
        AmenityRequirement::Presence { required }
    }

    /// Quantity used for count comparison
    ///
    /// Prose norms have no quantifiable target and compare as 0.
    pub fn required_quantity(&self) -> u32 {
        match self {
            AmenityRequirement::Numeric { quantity } => *quantity,
            AmenityRequirement::Structured(s) => s.quantity.unwrap_or(0),
            AmenityRequirement::Descriptive { .. } => 0,
            AmenityRequirement::Presence { required } => u32::from(*required),
        }
    }

    /// True when the norm explicitly marks the amenity as not required
    pub fn is_waived(&self) -> bool {
        matches!(self, AmenityRequirement::Presence { required: false })
    }

    /// Human readable form of the norm
    pub fn describe(&self) -> String {
        match self {
            AmenityRequirement::Numeric { quantity } => quantity.to_string(),
            AmenityRequirement::Structured(s) => s.describe(),
            AmenityRequirement::Descriptive { text } => text.clone(),
            AmenityRequirement::Presence { required: true } => "Required".to_string(),
            AmenityRequirement::Presence { required: false } => "Not required".to_string(),
        }
    }
}

/// Structured norm payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuredRequirement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_flush: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub with_cover: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl StructuredRequirement {
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    pub fn with_auto_flush(mut self, auto_flush: bool) -> Self {
        self.auto_flush = Some(auto_flush);
        self
    }

    pub fn with_cover(mut self, with_cover: bool) -> Self {
        self.with_cover = Some(with_cover);
        self
    }

    pub fn with_width(mut self, width: &str) -> Self {
        self.width = Some(width.to_string());
        self
    }

    pub fn with_spacing(mut self, spacing: &str) -> Self {
        self.spacing = Some(spacing.to_string());
        self
    }

    pub fn with_note(mut self, note: &str) -> Self {
        self.note = Some(note.to_string());
        self
    }

    fn describe(&self) -> String {
        let mut parts = Vec::new();
        if let Some(q) = self.quantity {
            parts.push(q.to_string());
        }
        if self.required == Some(true) {
            parts.push("required".to_string());
        }
        match self.auto_flush {
            Some(true) => parts.push("auto flush".to_string()),
            Some(false) => parts.push("manual flush".to_string()),
            None => {}
        }
        match self.with_cover {
            Some(true) => parts.push("covered".to_string()),
            Some(false) => parts.push("uncovered".to_string()),
            None => {}
        }
        if let Some(w) = &self.width {
            parts.push(format!("width {}", w));
        }
        if let Some(s) = &self.spacing {
            parts.push(format!("spacing {}", s));
        }
        let head = parts.join(", ");
        match (&self.note, head.is_empty()) {
            (Some(note), true) => note.clone(),
            (Some(note), false) => format!("{} ({})", head, note),
            (None, _) => head,
        }
    }
}

impl From<StructuredRequirement> for AmenityRequirement {
    fn from(value: StructuredRequirement) -> Self {
        AmenityRequirement::Structured(value)
    }
}

/// Outcome for a minimum-essential amenity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum VerdictStatus {
    Compliant,
    Shortfall { gap: u32 },
    NotApplicable,
}

/// Required-versus-available comparison for a minimum-essential amenity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantityVerdict {
    pub amenity: String,
    pub label: String,
    pub requirement: AmenityRequirement,
    pub required: u32,
    pub available: u32,
    #[serde(flatten)]
    pub status: VerdictStatus,
}

/// Availability of a desirable amenity; never carries a shortfall
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenceVerdict {
    pub amenity: String,
    pub label: String,
    pub available: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tier", rename_all = "snake_case")]
pub enum ComplianceVerdict {
    MinimumEssential(QuantityVerdict),
    Desirable(PresenceVerdict),
}

impl ComplianceVerdict {
    pub fn amenity(&self) -> &str {
        match self {
            ComplianceVerdict::MinimumEssential(v) => &v.amenity,
            ComplianceVerdict::Desirable(v) => &v.amenity,
        }
    }

    pub fn is_shortfall(&self) -> bool {
        matches!(
            self,
            ComplianceVerdict::MinimumEssential(QuantityVerdict {
                status: VerdictStatus::Shortfall { .. },
                ..
            })
        )
    }
}

/// Counts over a verdict list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceTally {
    pub compliant: u32,
    pub shortfall: u32,
    pub not_applicable: u32,
    pub desirable_available: u32,
    pub desirable_missing: u32,
}

impl ComplianceTally {
    pub fn from_verdicts(verdicts: &[ComplianceVerdict]) -> Self {
        let mut tally = Self::default();
        for verdict in verdicts {
            match verdict {
                ComplianceVerdict::MinimumEssential(v) => match v.status {
                    VerdictStatus::Compliant => tally.compliant += 1,
                    VerdictStatus::Shortfall { .. } => tally.shortfall += 1,
                    VerdictStatus::NotApplicable => tally.not_applicable += 1,
                },
                ComplianceVerdict::Desirable(v) if v.available => tally.desirable_available += 1,
                ComplianceVerdict::Desirable(_) => tally.desirable_missing += 1,
            }
        }
        tally
    }
}

/// Compliance report for one station
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub station_code: String,
    pub categorisation: String,
    pub category: Option<crate::StationCategory>,
    pub norms_defined: bool,
    pub snapshot_present: bool,
    pub verdicts: Vec<ComplianceVerdict>,
    pub tally: ComplianceTally,
}

/// "drinking_water_taps" -> "Drinking Water Taps"
pub fn amenity_label(name: &str) -> String {
    name.split('_')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
