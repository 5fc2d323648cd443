//! Report composition for gap analysis results
//!
//! Turns an [`gap_types::EvaluationResult`] into the three presentation
//! surfaces: the one-sentence summary, the on-screen findings table, and
//! the exportable document model. Binary encoding of the document (the
//! `.docx` container) is an external collaborator's job; this crate only
//! emits the structural model and the filename convention.

pub mod document;
pub mod export;
pub mod summary;
pub mod table;

pub use document::{compose_document, Block, DocumentModel, Run, TableBlock, DOCUMENT_TITLE};
pub use export::{export_filename, DocumentWriter, ExportError, JsonWriter};
pub use summary::summarize;
pub use table::{display_table, TableModel, DISPLAY_COLUMNS};
