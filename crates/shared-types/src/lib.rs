pub mod category;
pub mod compliance;
pub mod field;
pub mod station;
pub mod works;

pub use category::{normalize_category, StationCategory};
pub use compliance::{
    amenity_label, AmenityRequirement, ComplianceReport, ComplianceTally, ComplianceVerdict,
    PresenceVerdict, QuantityVerdict, StructuredRequirement, VerdictStatus,
};
pub use field::FieldValue;
pub use station::{StationAmenitySnapshot, StationRecord};
pub use works::{Remark, WorkOrder};
