//! Per-rule verdict checks
//!
//! One module per regulatory area. Every check is a pure function over the
//! vessel attributes and independent of the others.

pub mod fire;
pub mod lifesaving;
pub mod power;
pub mod radio;
pub mod security;
pub mod stability;
pub mod steering;

use gap_types::{RuleId, Verdict, VesselAttributes};

/// Dispatch to the check for a given catalog rule.
pub fn verdict_for(id: RuleId, attrs: &VesselAttributes) -> Verdict {
    match id {
        RuleId::SpsStability => stability::check_stability(attrs),
        RuleId::AuxiliarySteering => steering::check_auxiliary_steering(attrs),
        RuleId::MainSteering => steering::check_main_steering(attrs),
        RuleId::LifeSavingAppliances => lifesaving::check_life_saving(attrs),
        RuleId::GmdssRadio => radio::check_gmdss_radio(attrs),
        RuleId::SecurityPlan => security::check_security_plan(attrs),
        RuleId::FireProtection => fire::check_fire_protection(attrs),
        RuleId::EmergencyPower => power::check_emergency_power(attrs),
    }
}
