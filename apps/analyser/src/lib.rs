//! Resume/job-description match analysis.
//!
//! Turns unstructured resume text into structured section data, computes
//! keyword-overlap and learned-model match scores, and parses the generative
//! service's formatted rewrite reply into structured evaluation records.
//!
//! Document decoding (PDF/DOCX), persistence, and the HTTP surface are the
//! caller's problem: this crate consumes already-decoded text and produces
//! serializable reports.

pub mod analysis;
pub mod config;
pub mod errors;
pub mod llm_client;
pub mod models;
pub mod rewrite;

pub use analysis::keyword_match::{analyze, MatchReport};
pub use analysis::scoring::{score, Confidence, MatchScore};
pub use errors::AnalysisError;
pub use rewrite::{rewrite, RewriteResult};
