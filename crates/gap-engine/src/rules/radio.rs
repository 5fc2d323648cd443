// GMDSS radio compliance per SOLAS Chapter IV

use gap_types::{Verdict, VesselAttributes};

/// GMDSS radio installation is a hard requirement.
pub fn check_gmdss_radio(attrs: &VesselAttributes) -> Verdict {
    if attrs.gmdss_radio {
        Verdict::Compliant
    } else {
        Verdict::NonCompliant
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gap_types::{LifeboatType, SteeringGear};

    fn attrs_with_radio(gmdss_radio: bool) -> VesselAttributes {
        VesselAttributes {
            gross_tonnage: 500.0,
            special_personnel: 50,
            self_propelled: true,
            ums_certified: false,
            fire_protection: true,
            lifeboat: LifeboatType::Cargo,
            emergency_power: true,
            steering_gear: SteeringGear::Auxiliary,
            gmdss_radio,
            security_plan: true,
        }
    }

    #[test]
    fn radio_flag_decides_the_verdict() {
        assert_eq!(check_gmdss_radio(&attrs_with_radio(true)), Verdict::Compliant);
        assert_eq!(
            check_gmdss_radio(&attrs_with_radio(false)),
            Verdict::NonCompliant
        );
    }
}
