// Emergency electrical power per SOLAS II-1/19

use gap_types::{Verdict, VesselAttributes};

/// Missing emergency power warrants review, since backup duration or
/// source independence may simply be unconfirmed.
pub fn check_emergency_power(attrs: &VesselAttributes) -> Verdict {
    if attrs.emergency_power {
        Verdict::Compliant
    } else {
        Verdict::NeedsReview
    }
}
