//! Export seam: filename convention, writer trait, error type

use std::io;

use gap_types::Scenario;
use thiserror::Error;

use crate::document::DocumentModel;

/// Errors surfaced by document writers. Evaluation results stay valid and
/// displayable even when the export fails.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Filename for the exported report, derived from the scenario label.
pub fn export_filename(scenario: Scenario) -> String {
    format!("gap_analysis_{}.docx", scenario.label().replace(' ', "_"))
}

/// Sink for composed documents. The `.docx` encoder lives outside this
/// crate and implements this trait; [`JsonWriter`] covers the JSON wire
/// form.
pub trait DocumentWriter {
    fn write_document(&mut self, document: &DocumentModel) -> Result<(), ExportError>;
}

/// Writes the document model as pretty-printed JSON to any [`io::Write`].
pub struct JsonWriter<W: io::Write> {
    out: W,
}

impl<W: io::Write> JsonWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: io::Write> DocumentWriter for JsonWriter<W> {
    fn write_document(&mut self, document: &DocumentModel) -> Result<(), ExportError> {
        serde_json::to_writer_pretty(&mut self.out, document)?;
        Ok(())
    }
}
