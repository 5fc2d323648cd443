//! Exportable document model
//!
//! A document is an ordered list of blocks: headings, paragraphs made of
//! styled runs, tables, and page breaks. External serializers walk the
//! blocks to produce the binary container (`.docx` or otherwise).

use gap_types::EvaluationResult;
use serde::{Deserialize, Serialize};

use crate::summary::summarize;

/// Heading of every exported gap analysis report.
pub const DOCUMENT_TITLE: &str = "SPS–SOLAS Gap Analysis Report";

/// Column headers of the exported compliance table.
const EXPORT_COLUMNS: [&str; 4] = [
    "Rule Regulation Number",
    "Description of Rule",
    "Compliance or Not",
    "Reference",
];

/// A contiguous span of text with uniform styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    pub text: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub bold: bool,
}

impl Run {
    pub fn plain(text: impl Into<String>) -> Self {
        Run {
            text: text.into(),
            bold: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Run {
            text: text.into(),
            bold: true,
        }
    }
}

/// A header row plus data rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableBlock {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// One structural element of the document, in reading order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum Block {
    Heading { level: u8, text: String },
    Paragraph { runs: Vec<Run> },
    Table(TableBlock),
    PageBreak,
}

/// The full exportable document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentModel {
    pub blocks: Vec<Block>,
}

impl DocumentModel {
    /// JSON wire form consumed by external serializers.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Assemble the report document: title, scenario line, bold-labelled
/// summary, the 4-column compliance table, and a trailing page break.
pub fn compose_document(result: &EvaluationResult) -> DocumentModel {
    let rows: Vec<Vec<String>> = result
        .findings
        .iter()
        .map(|f| {
            vec![
                f.rule.to_string(),
                f.description.clone(),
                f.verdict.label().to_string(),
                f.reference.clone(),
            ]
        })
        .collect();

    let blocks = vec![
        Block::Heading {
            level: 0,
            text: DOCUMENT_TITLE.to_string(),
        },
        Block::Paragraph {
            runs: vec![Run::plain(format!("Scenario: {}", result.scenario))],
        },
        Block::Paragraph {
            runs: vec![Run::bold("Summary: "), Run::plain(summarize(result))],
        },
        Block::Table(TableBlock {
            header: EXPORT_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows,
        }),
        Block::PageBreak,
    ];

    tracing::debug!(
        scenario = %result.scenario,
        blocks = blocks.len(),
        "report document composed"
    );

    DocumentModel { blocks }
}
