//! Property-based tests for the compliance evaluator

use compliance_engine::{ComplianceEvaluator, NormsCatalog};
use proptest::prelude::*;
use shared_types::{ComplianceVerdict, StationAmenitySnapshot, VerdictStatus};

const QUANTIFIED: [&str; 6] = [
    "drinking_water_taps",
    "waiting_hall_sqm",
    "seating_per_platform",
    "platform_shelter_sqm",
    "urinals",
    "latrines",
];

fn nsg_category() -> impl Strategy<Value = String> {
    (1u8..=6, any::<bool>()).prop_map(|(tier, hyphen)| {
        if hyphen {
            format!("NSG-{}", tier)
        } else {
            format!("NSG{}", tier)
        }
    })
}

fn any_category() -> impl Strategy<Value = String> {
    prop_oneof![
        nsg_category(),
        (1u8..=3).prop_map(|tier| format!("HG-{}", tier)),
    ]
}

fn status_of(verdicts: &[ComplianceVerdict], amenity: &str) -> Option<VerdictStatus> {
    verdicts.iter().find_map(|v| match v {
        ComplianceVerdict::MinimumEssential(q) if q.amenity == amenity => Some(q.status),
        _ => None,
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // ============================================================
    // Monotonicity
    // ============================================================

    #[test]
    fn more_facilities_never_create_a_shortfall(
        category in nsg_category(),
        amenity_idx in 0usize..QUANTIFIED.len(),
        count in 0u32..400,
        extra in 0u32..400,
    ) {
        let catalog = NormsCatalog::standard();
        let evaluator = ComplianceEvaluator::new(&catalog);
        let amenity = QUANTIFIED[amenity_idx];
        let field = format!("{}_count", amenity);

        let low = StationAmenitySnapshot::new("X").with(&field, f64::from(count));
        let high = StationAmenitySnapshot::new("X").with(&field, f64::from(count + extra));

        let before = status_of(&evaluator.evaluate(&category, &low), amenity);
        let after = status_of(&evaluator.evaluate(&category, &high), amenity);

        if before == Some(VerdictStatus::Compliant) {
            prop_assert_eq!(after, Some(VerdictStatus::Compliant));
        }
    }

    #[test]
    fn shortfall_gap_is_required_minus_available(
        category in nsg_category(),
        count in 0u32..600,
    ) {
        let catalog = NormsCatalog::standard();
        let snapshot = StationAmenitySnapshot::new("X").with("urinals_count", f64::from(count));
        let verdicts = ComplianceEvaluator::new(&catalog).evaluate(&category, &snapshot);

        for verdict in &verdicts {
            if let ComplianceVerdict::MinimumEssential(q) = verdict {
                if let VerdictStatus::Shortfall { gap } = q.status {
                    prop_assert!(gap > 0);
                    prop_assert_eq!(gap, q.required - q.available);
                }
            }
        }
    }

    // ============================================================
    // Desirable verdicts
    // ============================================================

    #[test]
    fn desirable_verdicts_never_carry_a_shortfall(
        category in any_category(),
        wifi in prop_oneof![Just("Yes"), Just("No"), Just(""), Just("0")],
    ) {
        let catalog = NormsCatalog::standard();
        let snapshot = StationAmenitySnapshot::new("X").with("wifi", wifi);
        let verdicts = ComplianceEvaluator::new(&catalog).evaluate(&category, &snapshot);

        for verdict in &verdicts {
            if let ComplianceVerdict::Desirable(_) = verdict {
                prop_assert!(!verdict.is_shortfall());
            }
        }
    }

    // ============================================================
    // Category handling
    // ============================================================

    #[test]
    fn unknown_categories_produce_no_verdicts(raw in "[A-Z]{1,3}[7-9]") {
        let catalog = NormsCatalog::standard();
        let snapshot = StationAmenitySnapshot::new("X").with("urinals_count", 4.0);
        prop_assert!(ComplianceEvaluator::new(&catalog).evaluate(&raw, &snapshot).is_empty());
    }

    #[test]
    fn hyphen_does_not_change_verdicts(tier in 1u8..=6, count in 0u32..50) {
        let catalog = NormsCatalog::standard();
        let evaluator = ComplianceEvaluator::new(&catalog);
        let snapshot = StationAmenitySnapshot::new("X").with("latrines_count", f64::from(count));

        prop_assert_eq!(
            evaluator.evaluate(&format!("NSG-{}", tier), &snapshot),
            evaluator.evaluate(&format!("NSG{}", tier), &snapshot)
        );
    }
}
