//! On-screen findings table

use gap_types::EvaluationResult;
use serde::{Deserialize, Serialize};

/// Column headers of the on-screen table. The audit checklist note is kept
/// in the finding but omitted from display.
pub const DISPLAY_COLUMNS: [&str; 5] = [
    "Rule Regulation Number",
    "Description of Rule",
    "Regulatory Reference",
    "Observation / Current Status",
    "Compliance or Not",
];

/// A plain header-plus-rows table, ready for whatever widget renders it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableModel {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Build the on-screen table, one row per finding in catalog order.
pub fn display_table(result: &EvaluationResult) -> TableModel {
    let rows = result
        .findings
        .iter()
        .map(|f| {
            vec![
                f.rule.to_string(),
                f.description.clone(),
                f.reference.clone(),
                f.observation.clone(),
                f.verdict.label().to_string(),
            ]
        })
        .collect();

    TableModel {
        header: DISPLAY_COLUMNS.iter().map(|c| c.to_string()).collect(),
        rows,
    }
}
