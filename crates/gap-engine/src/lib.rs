//! SPS–SOLAS gap evaluation engine
//!
//! Classifies the conversion scenario from the vessel attributes and runs
//! every catalog rule once, producing one finding per rule in catalog
//! order. Evaluation is pure and infallible; input validation is the
//! collecting layer's job.

pub mod catalog;
pub mod rules;

use gap_types::{EvaluationResult, Finding, Scenario, VesselAttributes};

use crate::rules::stability::SPECIAL_PERSONNEL_THRESHOLD;

/// GapEngine entry point
pub struct GapEngine;

impl GapEngine {
    pub fn new() -> Self {
        Self
    }

    /// Run the full gap analysis over one set of vessel attributes.
    pub fn evaluate(&self, attrs: &VesselAttributes) -> EvaluationResult {
        let scenario = classify_scenario(attrs);
        let findings: Vec<Finding> = catalog::rules()
            .iter()
            .map(|rule| Finding::for_rule(rule, rules::verdict_for(rule.id, attrs)))
            .collect();

        tracing::debug!(
            scenario = %scenario,
            findings = findings.len(),
            "gap analysis evaluated"
        );

        EvaluationResult { scenario, findings }
    }
}

impl Default for GapEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify the conversion pathway. First match wins; a zero gross tonnage
/// with 60+ personnel reads as an existing SPS vessel crossing the
/// personnel threshold.
pub fn classify_scenario(attrs: &VesselAttributes) -> Scenario {
    if attrs.special_personnel < SPECIAL_PERSONNEL_THRESHOLD {
        Scenario::CargoToSpsUnder60
    } else if attrs.gross_tonnage != 0.0 {
        Scenario::CargoToSpsOver60
    } else {
        Scenario::SpsUnder60ToOver60
    }
}
