//! Resume Rewrite Orchestrator — builds the structured prompt, invokes the
//! generative service once, and parses the formatted reply.
//!
//! Flow: build prompt → single bounded generate call → parse_structured_reply.
//! No internal retry (a retried call may return materially different text);
//! the caller owns retry policy and re-scores the improved resume through the
//! analyzer and scorer if it wants fresh numbers.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AnalysisError;
use crate::llm_client::{GenerationOptions, GenerativeClient};
use crate::rewrite::prompts::REWRITE_PROMPT_TEMPLATE;

pub mod parser;
pub mod prompts;

pub use parser::parse_structured_reply;

/// Sampling temperature for rewrite calls. Fixed: reproducibility matters
/// more than variety here.
const TEMPERATURE: f32 = 0.7;
/// Upper bound on generated tokens for one rewrite reply.
const MAX_TOKENS: u32 = 2048;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// The service's quality verdict for one resume section.
///
/// `score` is the reported "X/10" string, not independently validated.
/// Ephemeral: produced per rewrite call, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionEvaluation {
    pub score: String,
    pub strengths: Vec<String>,
    pub areas_for_improvement: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Parsed output of one rewrite call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewriteResult {
    pub improved_resume: String,
    /// Concrete change descriptions, in reply order.
    pub changes: Vec<String>,
    /// Section name (as reported by the service) → evaluation.
    pub evaluations: std::collections::BTreeMap<String, SectionEvaluation>,
    /// Free-text strategy explanation, when the reply carried one.
    pub explanation: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Orchestration
// ────────────────────────────────────────────────────────────────────────────

/// Rewrites a resume against a job description via the generative service.
pub async fn rewrite(
    resume_text: &str,
    job_description: &str,
    client: &dyn GenerativeClient,
) -> Result<RewriteResult, AnalysisError> {
    let prompt = build_rewrite_prompt(resume_text, job_description);
    let options = GenerationOptions {
        temperature: TEMPERATURE,
        max_tokens: MAX_TOKENS,
    };

    let raw = client
        .generate(&prompt, &options)
        .await
        .map_err(|e| AnalysisError::Generation(e.to_string()))?;

    let result = parse_structured_reply(&raw)?;
    info!(
        sections = result.evaluations.len(),
        changes = result.changes.len(),
        "rewrite reply parsed"
    );
    Ok(result)
}

/// Fills the rewrite prompt template.
fn build_rewrite_prompt(resume_text: &str, job_description: &str) -> String {
    REWRITE_PROMPT_TEMPLATE
        .replace("{resume_text}", resume_text)
        .replace("{job_description}", job_description)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
