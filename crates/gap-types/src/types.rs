use serde::{Deserialize, Serialize};

/// Vessel attributes as supplied by the input form, one full set per
/// evaluation call. The evaluator performs no validation; callers reject
/// negative tonnage or personnel counts before building this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselAttributes {
    pub gross_tonnage: f64,
    pub special_personnel: u32,
    pub self_propelled: bool,
    pub ums_certified: bool,
    pub fire_protection: bool,
    pub lifeboat: LifeboatType,
    pub emergency_power: bool,
    pub steering_gear: SteeringGear,
    pub gmdss_radio: bool,
    pub security_plan: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifeboatType {
    Cargo,
    Passenger,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SteeringGear {
    Main,
    Auxiliary,
    None,
}

/// Compliance verdict for a single rule. The display labels (glyph + text)
/// are part of the external contract: they appear verbatim in the on-screen
/// table and the exported document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Compliant,
    NeedsReview,
    NonCompliant,
}

impl Verdict {
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Compliant => "✅ Compliant",
            Verdict::NeedsReview => "⚠️ Needs Review",
            Verdict::NonCompliant => "❌ Non-compliant",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The conversion pathway being assessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    CargoToSpsUnder60,
    CargoToSpsOver60,
    SpsUnder60ToOver60,
}

impl Scenario {
    /// Human-readable scenario line; also the basis of the export filename.
    pub fn label(&self) -> &'static str {
        match self {
            Scenario::CargoToSpsUnder60 => "Cargo to SPS <60",
            Scenario::CargoToSpsOver60 => "Cargo to SPS >60",
            Scenario::SpsUnder60ToOver60 => "SPS <60 to SPS >60",
        }
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Identifier of one of the eight catalog rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleId {
    #[serde(rename = "SPS 2.2.3")]
    SpsStability,
    #[serde(rename = "SOLAS II-1/29.6.1.2")]
    AuxiliarySteering,
    #[serde(rename = "SOLAS II-1/29.6.1.1")]
    MainSteering,
    #[serde(rename = "SOLAS III")]
    LifeSavingAppliances,
    #[serde(rename = "SOLAS IV")]
    GmdssRadio,
    #[serde(rename = "SOLAS XI-2")]
    SecurityPlan,
    #[serde(rename = "SOLAS II-2")]
    FireProtection,
    #[serde(rename = "SOLAS II-1/19")]
    EmergencyPower,
}

impl RuleId {
    /// All rule identifiers in catalog definition order.
    pub const ALL: [RuleId; 8] = [
        RuleId::SpsStability,
        RuleId::AuxiliarySteering,
        RuleId::MainSteering,
        RuleId::LifeSavingAppliances,
        RuleId::GmdssRadio,
        RuleId::SecurityPlan,
        RuleId::FireProtection,
        RuleId::EmergencyPower,
    ];

    /// Regulation number as printed in reports.
    pub fn regulation(&self) -> &'static str {
        match self {
            RuleId::SpsStability => "SPS 2.2.3",
            RuleId::AuxiliarySteering => "SOLAS II-1/29.6.1.2",
            RuleId::MainSteering => "SOLAS II-1/29.6.1.1",
            RuleId::LifeSavingAppliances => "SOLAS III",
            RuleId::GmdssRadio => "SOLAS IV",
            RuleId::SecurityPlan => "SOLAS XI-2",
            RuleId::FireProtection => "SOLAS II-2",
            RuleId::EmergencyPower => "SOLAS II-1/19",
        }
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.regulation())
    }
}

/// One catalog entry. Descriptions, references, and notes are verbatim
/// report text and must not be reworded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleDefinition {
    pub id: RuleId,
    pub description: &'static str,
    pub reference: &'static str,
    /// Conditional review note; empty when the rule has none.
    pub note: &'static str,
}

/// Fallback checklist guidance for rules without a review note.
pub const CHECKLIST_FALLBACK: &str = "Use rule description as guidance.";

/// The evaluated outcome for a single catalog rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub rule: RuleId,
    /// Rule description, with the review note appended in parentheses when
    /// the rule carries one.
    pub description: String,
    pub reference: String,
    /// Reserved for manual annotation during audit; never auto-filled.
    pub observation: String,
    pub verdict: Verdict,
    pub checklist_note: String,
}

impl Finding {
    /// Build a finding for a catalog rule with the given verdict.
    pub fn for_rule(rule: &RuleDefinition, verdict: Verdict) -> Self {
        let description = if rule.note.is_empty() {
            rule.description.to_string()
        } else {
            format!("{} ({})", rule.description, rule.note)
        };
        let checklist_note = if rule.note.is_empty() {
            CHECKLIST_FALLBACK.to_string()
        } else {
            rule.note.to_string()
        };
        Finding {
            rule: rule.id,
            description,
            reference: rule.reference.to_string(),
            observation: String::new(),
            verdict,
            checklist_note,
        }
    }
}

/// Output of one evaluation run: the classified scenario and exactly one
/// finding per catalog rule, in catalog definition order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub scenario: Scenario,
    pub findings: Vec<Finding>,
}
