// Stability standard per SPS Code 2.2.3

use gap_types::{Verdict, VesselAttributes};

/// Special-personnel count at and above which cargo-ship stability
/// treatment needs review (and may require passenger-ship treatment).
pub const SPECIAL_PERSONNEL_THRESHOLD: u32 = 60;

/// Cargo-ship stability treatment holds below 60 special personnel.
pub fn check_stability(attrs: &VesselAttributes) -> Verdict {
    if attrs.special_personnel < SPECIAL_PERSONNEL_THRESHOLD {
        Verdict::Compliant
    } else {
        Verdict::NeedsReview
    }
}
