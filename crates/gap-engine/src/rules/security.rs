// Ship security plan per SOLAS Chapter XI-2 (ISPS Code)

use gap_types::{Verdict, VesselAttributes};

/// A missing security plan warrants review rather than outright failure,
/// since security measures may be in progress or partially implemented.
pub fn check_security_plan(attrs: &VesselAttributes) -> Verdict {
    if attrs.security_plan {
        Verdict::Compliant
    } else {
        Verdict::NeedsReview
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gap_types::{LifeboatType, SteeringGear};

    fn attrs_with_security(security_plan: bool) -> VesselAttributes {
        VesselAttributes {
            gross_tonnage: 500.0,
            special_personnel: 50,
            self_propelled: true,
            ums_certified: false,
            fire_protection: true,
            lifeboat: LifeboatType::Cargo,
            emergency_power: true,
            steering_gear: SteeringGear::Auxiliary,
            gmdss_radio: true,
            security_plan,
        }
    }

    #[test]
    fn missing_plan_needs_review_not_failure() {
        assert_eq!(
            check_security_plan(&attrs_with_security(true)),
            Verdict::Compliant
        );
        assert_eq!(
            check_security_plan(&attrs_with_security(false)),
            Verdict::NeedsReview
        );
    }
}
