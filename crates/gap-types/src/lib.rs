//! Shared types for the SPS–SOLAS gap analysis core
//!
//! Data model used by the evaluation engine and the report composer:
//! vessel attributes as collected from the operator, the rule catalog
//! entries, per-rule findings, and the session-scoped analysis history.

pub mod history;
pub mod types;

pub use history::{AnalysisHistory, AnalysisRecord};
pub use types::{
    EvaluationResult, Finding, LifeboatType, RuleDefinition, RuleId, Scenario, SteeringGear,
    Verdict, VesselAttributes, CHECKLIST_FALLBACK,
};
