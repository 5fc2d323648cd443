// Steering gear standards per SOLAS II-1/29.6.1.1 and II-1/29.6.1.2

use gap_types::{SteeringGear, Verdict, VesselAttributes};

/// Auxiliary steering gear requirement for ships carrying ≤240 persons.
pub fn check_auxiliary_steering(attrs: &VesselAttributes) -> Verdict {
    if attrs.steering_gear == SteeringGear::Auxiliary {
        Verdict::Compliant
    } else {
        Verdict::NeedsReview
    }
}

/// Main steering gear requirement for ships carrying >240 persons.
pub fn check_main_steering(attrs: &VesselAttributes) -> Verdict {
    if attrs.steering_gear == SteeringGear::Main {
        Verdict::Compliant
    } else {
        Verdict::NeedsReview
    }
}
