//! One-sentence compliance summary

use gap_types::{EvaluationResult, Verdict};

/// Render the summary sentence for a completed run.
///
/// Verdicts are counted by exact enum match, so the three counts always
/// sum to the number of findings. (Counting by display-label substring
/// would invite double-counting "Non-compliant" as "compliant" in
/// case-insensitive ports.)
pub fn summarize(result: &EvaluationResult) -> String {
    let mut compliant = 0usize;
    let mut review = 0usize;
    let mut noncompliant = 0usize;
    for finding in &result.findings {
        match finding.verdict {
            Verdict::Compliant => compliant += 1,
            Verdict::NeedsReview => review += 1,
            Verdict::NonCompliant => noncompliant += 1,
        }
    }

    format!(
        "Out of {} rules checked: {} are compliant, {} need review, and {} are non-compliant.",
        result.findings.len(),
        compliant,
        review,
        noncompliant
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use gap_engine::GapEngine;
    use gap_types::{Finding, LifeboatType, Scenario, SteeringGear, VesselAttributes};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    // Auxiliary gear satisfies II-1/29.6.1.2 but leaves II-1/29.6.1.1
    // needing review, so even a fully equipped vessel tops out at 7
    // compliant rules.
    #[test]
    fn well_found_vessel_summary_sentence() {
        let attrs = VesselAttributes {
            gross_tonnage: 500.0,
            special_personnel: 50,
            self_propelled: true,
            ums_certified: true,
            fire_protection: true,
            lifeboat: LifeboatType::Cargo,
            emergency_power: true,
            steering_gear: SteeringGear::Auxiliary,
            gmdss_radio: true,
            security_plan: true,
        };
        let result = GapEngine::new().evaluate(&attrs);
        assert_eq!(
            summarize(&result),
            "Out of 8 rules checked: 7 are compliant, 1 need review, and 0 are non-compliant."
        );
    }

    #[test]
    fn mixed_verdicts_are_counted_exactly_once_each() {
        let attrs = VesselAttributes {
            gross_tonnage: 500.0,
            special_personnel: 70,
            self_propelled: true,
            ums_certified: false,
            fire_protection: false,
            lifeboat: LifeboatType::None,
            emergency_power: false,
            steering_gear: SteeringGear::None,
            gmdss_radio: false,
            security_plan: false,
        };
        let result = GapEngine::new().evaluate(&attrs);
        // 5 review + 3 non-compliant; "Non-compliant" must not bleed into
        // the compliant count.
        assert_eq!(
            summarize(&result),
            "Out of 8 rules checked: 0 are compliant, 5 need review, and 3 are non-compliant."
        );
    }

    proptest! {
        #[test]
        fn counts_cover_every_finding(
            verdicts in proptest::collection::vec(arb_verdict(), 8)
        ) {
            let findings: Vec<Finding> = gap_engine::catalog::rules()
                .iter()
                .zip(&verdicts)
                .map(|(rule, verdict)| Finding::for_rule(rule, *verdict))
                .collect();
            let result = EvaluationResult {
                scenario: Scenario::CargoToSpsUnder60,
                findings,
            };

            let compliant = verdicts.iter().filter(|v| **v == Verdict::Compliant).count();
            let review = verdicts.iter().filter(|v| **v == Verdict::NeedsReview).count();
            let noncompliant = verdicts
                .iter()
                .filter(|v| **v == Verdict::NonCompliant)
                .count();
            prop_assert_eq!(compliant + review + noncompliant, 8);
            prop_assert_eq!(
                summarize(&result),
                format!(
                    "Out of 8 rules checked: {} are compliant, {} need review, and {} are non-compliant.",
                    compliant, review, noncompliant
                )
            );
        }
    }

    fn arb_verdict() -> impl Strategy<Value = Verdict> {
        prop_oneof![
            Just(Verdict::Compliant),
            Just(Verdict::NeedsReview),
            Just(Verdict::NonCompliant),
        ]
    }
}
