//! Minimum essential amenities for halt stations (HG1..HG3)

use shared_types::{AmenityRequirement, StationCategory, StructuredRequirement};

use super::RequirementSet;

fn double_line_bridge() -> AmenityRequirement {
    StructuredRequirement::default()
        .with_required(true)
        .with_note("For double line section")
        .into()
}

pub fn minimum_set(category: StationCategory) -> RequirementSet {
    let drinking_water = (
        "drinking_water",
        AmenityRequirement::descriptive("Appropriate facility"),
    );
    let booking_hall = (
        "waiting_hall",
        AmenityRequirement::descriptive("10 sqm booking office cum waiting hall"),
    );
    let platform_level = ("platform_level", AmenityRequirement::descriptive("High Level"));
    let dustbins = ("dustbins", AmenityRequirement::descriptive("As per instructions"));

    match category {
        StationCategory::Hg1 => RequirementSet::from_entries(vec![
            drinking_water,
            booking_hall,
            (
                "platform_shelter",
                AmenityRequirement::descriptive("Bus type modular shelter"),
            ),
            platform_level,
            (
                "lighting",
                AmenityRequirement::descriptive("As per Board standards"),
            ),
            ("foot_over_bridge", double_line_bridge()),
            (
                "time_table",
                AmenityRequirement::descriptive("As per instructions"),
            ),
            ("clock", AmenityRequirement::presence(true)),
            dustbins,
        ]),
        StationCategory::Hg2 => RequirementSet::from_entries(vec![
            drinking_water,
            booking_hall,
            (
                "platform_shelter",
                AmenityRequirement::descriptive("Shady trees"),
            ),
            platform_level,
            (
                "lighting",
                AmenityRequirement::descriptive("For night trains"),
            ),
            ("foot_over_bridge", double_line_bridge()),
            dustbins,
        ]),
        StationCategory::Hg3 => RequirementSet::from_entries(vec![
            drinking_water,
            (
                "platform_shelter",
                AmenityRequirement::descriptive("Shady trees"),
            ),
            platform_level,
            (
                "lighting",
                AmenityRequirement::descriptive("For night trains"),
            ),
            ("foot_over_bridge", double_line_bridge()),
            dustbins,
        ]),
        _ => RequirementSet::empty(),
    }
}
