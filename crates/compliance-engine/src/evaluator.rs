//! Required-versus-available comparison
//!
//! Evaluation never fails. Malformed recorded values degrade to 0 or absent.

use shared_types::{
    amenity_label, AmenityRequirement, ComplianceVerdict, PresenceVerdict, QuantityVerdict,
    StationAmenitySnapshot, VerdictStatus,
};

use crate::norms::NormsCatalog;

/// Compares one station's snapshot against a borrowed catalog
#[derive(Debug, Clone, Copy)]
pub struct ComplianceEvaluator<'a> {
    catalog: &'a NormsCatalog,
}

impl<'a> ComplianceEvaluator<'a> {
    pub fn new(catalog: &'a NormsCatalog) -> Self {
        Self { catalog }
    }

    /// Minimum-essential verdicts in catalog order, then desirable ones
    pub fn evaluate(
        &self,
        category: &str,
        snapshot: &StationAmenitySnapshot,
    ) -> Vec<ComplianceVerdict> {
        let minimum = self.catalog.get_minimum_amenities(category);
        let desirable = self.catalog.get_desirable_amenities(category);

        let mut verdicts = Vec::with_capacity(minimum.len() + desirable.len());

        for (amenity, requirement) in minimum.iter() {
            verdicts.push(ComplianceVerdict::MinimumEssential(minimum_verdict(
                amenity,
                requirement,
                snapshot,
            )));
        }

        for amenity in desirable.recommended() {
            let available = snapshot
                .get(amenity)
                .map(|v| v.is_truthy())
                .unwrap_or(false);
            verdicts.push(ComplianceVerdict::Desirable(PresenceVerdict {
                amenity: amenity.to_string(),
                label: amenity_label(amenity),
                available,
            }));
        }

        verdicts
    }
}

fn minimum_verdict(
    amenity: &str,
    requirement: &AmenityRequirement,
    snapshot: &StationAmenitySnapshot,
) -> QuantityVerdict {
    let required = requirement.required_quantity();
    let recorded = snapshot.count_for(amenity);

    let available = match requirement {
        AmenityRequirement::Presence { required: true } => {
            u32::from(recorded.map(|v| v.is_truthy()).unwrap_or(false))
        }
        _ => recorded.map(|v| v.as_count()).unwrap_or(0),
    };

    let status = if requirement.is_waived() {
        VerdictStatus::NotApplicable
    } else if available >= required {
        VerdictStatus::Compliant
    } else {
        VerdictStatus::Shortfall {
            gap: required - available,
        }
    };

    QuantityVerdict {
        amenity: amenity.to_string(),
        label: amenity_label(amenity),
        requirement: requirement.clone(),
        required,
        available,
        status,
    }
}
