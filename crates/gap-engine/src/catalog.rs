//! Static catalog of the eight SPS/SOLAS rules under assessment
//!
//! The catalog is fixed for the process lifetime and ordered; reports
//! iterate it in definition order. Descriptions, references, and notes are
//! verbatim report text.

use gap_types::{RuleDefinition, RuleId};

/// Number of rules in the catalog.
pub const RULE_COUNT: usize = 8;

static RULES: [RuleDefinition; RULE_COUNT] = [
    RuleDefinition {
        id: RuleId::SpsStability,
        description: "Stability treated as cargo ship",
        reference: "https://www.imo.org/en/OurWork/Safety/Pages/SpecialPurposeShips.aspx",
        note: "Review if special personnel > 60; may need to treat as passenger ship",
    },
    RuleDefinition {
        id: RuleId::AuxiliarySteering,
        description: "Auxiliary steering gear for ships ≤240 persons.",
        reference: "https://www.imo.org/en/OurWork/Safety/Pages/SOLAS.aspx",
        note: "Review if vessel may exceed 240 personnel or lacks verified capacity",
    },
    RuleDefinition {
        id: RuleId::MainSteering,
        description: "Main steering gear for ships >240 persons.",
        reference: "https://www.imo.org/en/OurWork/Safety/Pages/SOLAS.aspx",
        note: "Review if gear not confirmed for >240 personnel",
    },
    RuleDefinition {
        id: RuleId::LifeSavingAppliances,
        description: "Life-saving appliances appropriate to personnel type.",
        reference: "https://www.imo.org/en/OurWork/Safety/Pages/Life-Saving-Appliances.aspx",
        note: "Review for SPS vessels transitioning to >60 persons",
    },
    RuleDefinition {
        id: RuleId::GmdssRadio,
        description: "GMDSS radio compliance for safety communication.",
        reference: "https://www.imo.org/en/OurWork/Safety/Pages/Radio-Communications.aspx",
        note: "",
    },
    RuleDefinition {
        id: RuleId::SecurityPlan,
        description: "Security plan for ship safety under ISPS Code.",
        reference: "https://www.imo.org/en/OurWork/Security/Pages/SOLAS-XI-2.aspx",
        note: "Review if security measures in progress or partially implemented",
    },
    RuleDefinition {
        id: RuleId::FireProtection,
        description: "Fire protection systems compliance for vessel type.",
        reference: "https://www.imo.org/en/OurWork/Safety/Pages/FireSafety.aspx",
        note: "",
    },
    RuleDefinition {
        id: RuleId::EmergencyPower,
        description: "Emergency electrical power supply standards.",
        reference: "https://www.imo.org/en/OurWork/Safety/Pages/SOLAS.aspx",
        note: "Review if backup duration or independence not fully confirmed",
    },
];

/// All rules in definition order.
pub fn rules() -> &'static [RuleDefinition] {
    &RULES
}

/// Look up a single rule by identifier.
pub fn rule(id: RuleId) -> &'static RuleDefinition {
    match id {
        RuleId::SpsStability => &RULES[0],
        RuleId::AuxiliarySteering => &RULES[1],
        RuleId::MainSteering => &RULES[2],
        RuleId::LifeSavingAppliances => &RULES[3],
        RuleId::GmdssRadio => &RULES[4],
        RuleId::SecurityPlan => &RULES[5],
        RuleId::FireProtection => &RULES[6],
        RuleId::EmergencyPower => &RULES[7],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn catalog_order_matches_rule_id_order() {
        let ids: Vec<RuleId> = rules().iter().map(|r| r.id).collect();
        assert_eq!(ids, RuleId::ALL.to_vec());
    }

    #[test]
    fn lookup_returns_the_matching_definition() {
        for id in RuleId::ALL {
            assert_eq!(rule(id).id, id);
        }
    }

    #[test]
    fn radio_and_fire_rules_have_no_note() {
        assert_eq!(rule(RuleId::GmdssRadio).note, "");
        assert_eq!(rule(RuleId::FireProtection).note, "");
        for id in RuleId::ALL {
            if id != RuleId::GmdssRadio && id != RuleId::FireProtection {
                assert!(!rule(id).note.is_empty(), "{id} should carry a note");
            }
        }
    }

    #[test]
    fn stability_rule_text_is_verbatim() {
        let stability = rule(RuleId::SpsStability);
        assert_eq!(stability.description, "Stability treated as cargo ship");
        assert_eq!(
            stability.note,
            "Review if special personnel > 60; may need to treat as passenger ship"
        );
        assert_eq!(
            stability.reference,
            "https://www.imo.org/en/OurWork/Safety/Pages/SpecialPurposeShips.aspx"
        );
    }
}
