//! Desirable (recommended) amenities
//!
//! NSG2 and NSG3 share the NSG1 list. NSG4..NSG6 have their own short lists.
//! Halt stations have none.

use shared_types::StationCategory;

use super::DesirableSet;

pub const NSG1_DESIRABLE: [&str; 35] = [
    "retiring_room",
    "waiting_room_with_bath",
    "cloak_room",
    "enquiry_counter",
    "ntes",
    "ivrs",
    "public_address_system",
    "book_stalls",
    "refreshment_room",
    "parking_area",
    "train_indicator",
    "touch_screen",
    "water_vending",
    "escalators",
    "travellator",
    "signage",
    "modular_catering",
    "automatic_vending",
    "pay_use_toilets",
    "cyber_cafe",
    "atm",
    "executive_lounge",
    "food_plaza",
    "train_coach_indication",
    "cctv",
    "coin_operated_ticket",
    "pre_paid_taxi",
    "access_control",
    "bio_toilets",
    "bottle_crushers",
    "wifi",
    "second_entry",
    "senior_citizen_waiting",
    "wheelchair_facilities",
    "water_fountain",
];

pub const NSG4_DESIRABLE: [&str; 5] = [
    "pay_use_toilets",
    "atm",
    "bio_toilets",
    "wifi",
    "second_entry",
];

pub const NSG5_DESIRABLE: [&str; 3] = ["pay_use_toilets", "atm", "bio_toilets"];

pub const NSG6_DESIRABLE: [&str; 3] = ["pay_use_toilets", "atm", "bio_toilets"];

pub fn desirable_set(category: StationCategory) -> DesirableSet {
    match category {
        StationCategory::Nsg1 | StationCategory::Nsg2 | StationCategory::Nsg3 => {
            DesirableSet::recommending(&NSG1_DESIRABLE)
        }
        StationCategory::Nsg4 => DesirableSet::recommending(&NSG4_DESIRABLE),
        StationCategory::Nsg5 => DesirableSet::recommending(&NSG5_DESIRABLE),
        StationCategory::Nsg6 => DesirableSet::recommending(&NSG6_DESIRABLE),
        StationCategory::Hg1 | StationCategory::Hg2 | StationCategory::Hg3 => DesirableSet::empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upper_tiers_share_nsg1_list() {
        let nsg1 = desirable_set(StationCategory::Nsg1);
        assert_eq!(nsg1.len(), 35);
        assert_eq!(desirable_set(StationCategory::Nsg2), nsg1);
        assert_eq!(desirable_set(StationCategory::Nsg3), nsg1);
    }

    #[test]
    fn test_lower_tiers_have_short_lists() {
        assert_eq!(desirable_set(StationCategory::Nsg4).len(), 5);
        assert_eq!(desirable_set(StationCategory::Nsg5).len(), 3);
        assert_eq!(
            desirable_set(StationCategory::Nsg6).recommended().collect::<Vec<_>>(),
            vec!["pay_use_toilets", "atm", "bio_toilets"]
        );
    }

    #[test]
    fn test_every_listed_amenity_is_recommended() {
        let set = desirable_set(StationCategory::Nsg1);
        assert_eq!(set.recommended().count(), set.len());
    }

    #[test]
    fn test_halt_has_no_desirable() {
        assert!(desirable_set(StationCategory::Hg2).is_empty());
    }
}
