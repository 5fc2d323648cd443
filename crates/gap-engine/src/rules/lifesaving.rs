// Life-saving appliances per SOLAS Chapter III

use gap_types::{LifeboatType, Verdict, VesselAttributes};

/// Life-saving appliances must match the personnel type; a vessel with no
/// lifeboats is non-compliant outright.
pub fn check_life_saving(attrs: &VesselAttributes) -> Verdict {
    match attrs.lifeboat {
        LifeboatType::Cargo | LifeboatType::Passenger => Verdict::Compliant,
        LifeboatType::None => Verdict::NonCompliant,
    }
}
