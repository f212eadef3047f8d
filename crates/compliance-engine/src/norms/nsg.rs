//! Minimum essential amenities for NSG1..NSG6
//!
//! NSG1 is the base; every lower tier is NSG1 plus a list of replacements.
//! Amenities a tier does not override keep their NSG1 value.

use shared_types::{AmenityRequirement, StationCategory, StructuredRequirement};

use super::RequirementSet;

const LADIES_SHARE: &str = "1/3rd for ladies";

fn sanitary(quantity: u32, auto_flush: bool) -> AmenityRequirement {
    StructuredRequirement::default()
        .with_quantity(quantity)
        .with_auto_flush(auto_flush)
        .with_note(LADIES_SHARE)
        .into()
}

fn water_taps(quantity: u32, note: &str) -> AmenityRequirement {
    StructuredRequirement::default()
        .with_quantity(quantity)
        .with_note(note)
        .into()
}

/// NSG1 norms, the base every NSG tier derives from
pub fn nsg1_base() -> RequirementSet {
    RequirementSet::from_entries(vec![
        (
            "drinking_water_taps",
            water_taps(20, "One tap for disabled persons on alternate water booths"),
        ),
        ("waiting_hall_sqm", AmenityRequirement::numeric(250)),
        ("seating_per_platform", AmenityRequirement::numeric(150)),
        ("platform_shelter_sqm", AmenityRequirement::numeric(500)),
        ("urinals", sanitary(12, true)),
        ("latrines", sanitary(12, true)),
        ("platform_level", AmenityRequirement::descriptive("High Level")),
        (
            "lighting",
            AmenityRequirement::descriptive("As per Board standards"),
        ),
        (
            "fans",
            StructuredRequirement::default()
                .with_note("One row for 6-9m width platform, two rows for >9m")
                .into(),
        ),
        (
            "foot_over_bridge",
            StructuredRequirement::default()
                .with_required(true)
                .with_cover(true)
                .with_width("6m minimum")
                .into(),
        ),
        (
            "time_table",
            AmenityRequirement::descriptive("As per extant instructions"),
        ),
        ("clock", AmenityRequirement::descriptive("As per zonal railways")),
        ("water_cooler", AmenityRequirement::descriptive("2 on each PF")),
        (
            "public_address_system",
            AmenityRequirement::descriptive("As per extant instructions"),
        ),
        ("parking_area", AmenityRequirement::descriptive("With lights")),
        (
            "train_indicator",
            AmenityRequirement::descriptive("As per extant instructions"),
        ),
        (
            "signage",
            StructuredRequirement::default()
                .with_required(true)
                .with_note("Standardized per Board guidelines")
                .into(),
        ),
        (
            "dustbins",
            StructuredRequirement::default()
                .with_spacing("50m")
                .with_note("Uniformly designed")
                .into(),
        ),
    ])
}

/// Replacements a tier applies on top of NSG1
pub fn overrides(category: StationCategory) -> Vec<(&'static str, AmenityRequirement)> {
    match category {
        StationCategory::Nsg3 => vec![
            ("waiting_hall_sqm", AmenityRequirement::numeric(125)),
            ("seating_per_platform", AmenityRequirement::numeric(125)),
            ("platform_shelter_sqm", AmenityRequirement::numeric(400)),
            ("urinals", sanitary(10, true)),
            ("latrines", sanitary(10, true)),
        ],
        StationCategory::Nsg4 => vec![
            ("waiting_hall_sqm", AmenityRequirement::numeric(75)),
            ("seating_per_platform", AmenityRequirement::numeric(100)),
            ("platform_shelter_sqm", AmenityRequirement::numeric(200)),
            ("urinals", sanitary(4, false)),
            ("latrines", sanitary(6, false)),
            (
                "foot_over_bridge",
                StructuredRequirement::default()
                    .with_required(true)
                    .with_cover(false)
                    .into(),
            ),
        ],
        StationCategory::Nsg5 => vec![
            (
                "drinking_water_taps",
                water_taps(8, "One tap for disabled persons"),
            ),
            ("waiting_hall_sqm", AmenityRequirement::numeric(30)),
            ("seating_per_platform", AmenityRequirement::numeric(50)),
            ("platform_shelter_sqm", AmenityRequirement::numeric(50)),
            ("urinals", sanitary(4, false)),
            ("latrines", sanitary(4, false)),
            ("water_cooler", AmenityRequirement::descriptive("1 on main PF")),
        ],
        StationCategory::Nsg6 => vec![
            (
                "drinking_water_taps",
                water_taps(2, "Alternative arrangement where piped water not feasible"),
            ),
            ("waiting_hall_sqm", AmenityRequirement::numeric(15)),
            ("seating_per_platform", AmenityRequirement::numeric(10)),
            ("platform_shelter_sqm", AmenityRequirement::numeric(50)),
            ("urinals", sanitary(1, false)),
            ("latrines", sanitary(1, false)),
            ("water_cooler", AmenityRequirement::descriptive("1 on main PF")),
            (
                "dustbins",
                StructuredRequirement::default()
                    .with_spacing("As required")
                    .with_note("Adequate numbers")
                    .into(),
            ),
            ("train_indicator", AmenityRequirement::presence(false)),
        ],
        // NSG1 is the base and NSG2 shares it verbatim
        _ => Vec::new(),
    }
}

/// Minimum essential set for an NSG tier
pub fn minimum_set(category: StationCategory) -> RequirementSet {
    nsg1_base().with_overrides(overrides(category))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn quantity(set: &RequirementSet, name: &str) -> u32 {
        set.get(name)
            .map(AmenityRequirement::required_quantity)
            .unwrap_or_else(|| panic!("{} missing", name))
    }

    #[test]
    fn test_nsg1_base_quantities() {
        let set = nsg1_base();
        assert_eq!(set.len(), 18);
        assert_eq!(quantity(&set, "drinking_water_taps"), 20);
        assert_eq!(quantity(&set, "waiting_hall_sqm"), 250);
        assert_eq!(quantity(&set, "urinals"), 12);
        assert_eq!(quantity(&set, "latrines"), 12);
        assert_eq!(quantity(&set, "lighting"), 0);
    }

    #[test]
    fn test_nsg2_is_nsg1() {
        assert_eq!(minimum_set(StationCategory::Nsg2), nsg1_base());
    }

    #[test]
    fn test_nsg3_relaxes_halls_and_sanitation() {
        let set = minimum_set(StationCategory::Nsg3);
        assert_eq!(quantity(&set, "waiting_hall_sqm"), 125);
        assert_eq!(quantity(&set, "seating_per_platform"), 125);
        assert_eq!(quantity(&set, "platform_shelter_sqm"), 400);
        assert_eq!(quantity(&set, "urinals"), 10);
        assert_eq!(quantity(&set, "drinking_water_taps"), 20);
        assert_eq!(set.names(), nsg1_base().names());
    }

    #[test]
    fn test_nsg4_drops_bridge_cover() {
        let set = minimum_set(StationCategory::Nsg4);
        match set.get("foot_over_bridge") {
            Some(AmenityRequirement::Structured(s)) => {
                assert_eq!(s.with_cover, Some(false));
                assert_eq!(s.required, Some(true));
                assert_eq!(s.width, None);
            }
            other => panic!("unexpected bridge norm {:?}", other),
        }
        assert_eq!(quantity(&set, "latrines"), 6);
        assert_eq!(quantity(&set, "urinals"), 4);
    }

    #[test]
    fn test_nsg5_inherits_unchanged_fields() {
        let set = minimum_set(StationCategory::Nsg5);
        let base = nsg1_base();
        assert_eq!(quantity(&set, "drinking_water_taps"), 8);
        assert_eq!(set.get("fans"), base.get("fans"));
        assert_eq!(set.get("foot_over_bridge"), base.get("foot_over_bridge"));
        assert_eq!(set.get("train_indicator"), base.get("train_indicator"));
    }

    #[test]
    fn test_nsg6_waives_train_indicator() {
        let set = minimum_set(StationCategory::Nsg6);
        assert_eq!(
            set.get("train_indicator"),
            Some(&AmenityRequirement::presence(false))
        );
        assert_eq!(quantity(&set, "urinals"), 1);
        assert_eq!(quantity(&set, "drinking_water_taps"), 2);
        assert_eq!(quantity(&set, "seating_per_platform"), 10);
    }

    #[test]
    fn test_override_order_matches_base() {
        for category in [
            StationCategory::Nsg3,
            StationCategory::Nsg4,
            StationCategory::Nsg5,
            StationCategory::Nsg6,
        ] {
            assert_eq!(minimum_set(category).names(), nsg1_base().names());
        }
    }
}
