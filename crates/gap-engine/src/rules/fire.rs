// Fire protection systems per SOLAS Chapter II-2

use gap_types::{Verdict, VesselAttributes};

/// Fire protection appropriate to the vessel type is a hard requirement.
pub fn check_fire_protection(attrs: &VesselAttributes) -> Verdict {
    if attrs.fire_protection {
        Verdict::Compliant
    } else {
        Verdict::NonCompliant
    }
}
