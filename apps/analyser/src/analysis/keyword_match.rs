//! Keyword Match Analyzer — combines segmentation and keyword extraction into
//! per-section and overall match statistics against a job description.
//!
//! Total by design: degenerate input (empty resume, job description with no
//! extractable keywords) yields a zero-valued report, never an error.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::keywords::{extract_keywords, keyword_frequencies};
use crate::analysis::sections::{segment, SectionLabel};

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// A job keyword found in one resume section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordHit {
    pub keyword: String,
    /// Occurrences within the section's text body.
    pub count: usize,
    /// Fixed at 1.0 — exact-token matches only, no partial/fuzzy matching.
    pub relevance: f32,
}

/// Match statistics for one resume section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionMatch {
    pub keywords: Vec<KeywordHit>,
    /// (# matched keywords) / (# job keywords); 0.0 when the job description
    /// yields no keywords.
    pub score: f64,
}

/// One section in which a job keyword occurs, with its in-section count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionOccurrence {
    pub section: SectionLabel,
    pub count: usize,
}

/// Where (if anywhere) a single job keyword shows up across the resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordRelevance {
    pub keyword: String,
    pub found: bool,
    pub sections: Vec<SectionOccurrence>,
}

/// Full keyword match report returned to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub section_analysis: BTreeMap<SectionLabel, SectionMatch>,
    pub keyword_relevance: Vec<KeywordRelevance>,
    pub job_keywords: Vec<String>,
    /// Diagnostic only — reported but deliberately not used in scoring.
    pub resume_keywords: Vec<String>,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    /// Distinct matched / distinct job keywords × 100, one decimal place.
    pub match_percentage: f64,
}

// ────────────────────────────────────────────────────────────────────────────
// Analysis
// ────────────────────────────────────────────────────────────────────────────

/// Analyzes how well a resume's sections cover the job description's keywords.
pub fn analyze(resume_text: &str, job_description: &str) -> MatchReport {
    let job_keywords = extract_keywords(job_description);
    let resume_keywords = extract_keywords(resume_text);
    let buckets = segment(resume_text);

    debug!(
        job_keywords = job_keywords.len(),
        resume_keywords = resume_keywords.len(),
        sections = buckets.len(),
        "keyword analysis inputs"
    );

    // Per-section hits, scanning every label so empty sections still report.
    let mut section_analysis: BTreeMap<SectionLabel, SectionMatch> = BTreeMap::new();
    for label in SectionLabel::ALL {
        let section_text = buckets
            .get(&label)
            .map(|lines| lines.join(" "))
            .unwrap_or_default();
        let section_freq = keyword_frequencies(&section_text);

        let keywords: Vec<KeywordHit> = job_keywords
            .iter()
            .filter_map(|kw| {
                section_freq.get(kw).map(|&count| KeywordHit {
                    keyword: kw.clone(),
                    count,
                    relevance: 1.0,
                })
            })
            .collect();

        let score = if job_keywords.is_empty() {
            0.0
        } else {
            keywords.len() as f64 / job_keywords.len() as f64
        };

        section_analysis.insert(label, SectionMatch { keywords, score });
    }

    // Global relevance rows: which sections carry each job keyword.
    let keyword_relevance: Vec<KeywordRelevance> = job_keywords
        .iter()
        .map(|kw| {
            let sections: Vec<SectionOccurrence> = SectionLabel::ALL
                .iter()
                .filter_map(|&label| {
                    section_analysis[&label]
                        .keywords
                        .iter()
                        .find(|hit| &hit.keyword == kw)
                        .map(|hit| SectionOccurrence {
                            section: label,
                            count: hit.count,
                        })
                })
                .collect();
            KeywordRelevance {
                keyword: kw.clone(),
                found: !sections.is_empty(),
                sections,
            }
        })
        .collect();

    let matched_keywords: Vec<String> = keyword_relevance
        .iter()
        .filter(|r| r.found)
        .map(|r| r.keyword.clone())
        .collect();
    let missing_keywords: Vec<String> = keyword_relevance
        .iter()
        .filter(|r| !r.found)
        .map(|r| r.keyword.clone())
        .collect();

    let match_percentage = if job_keywords.is_empty() {
        0.0
    } else {
        let pct = matched_keywords.len() as f64 / job_keywords.len() as f64 * 100.0;
        (pct * 10.0).round() / 10.0
    };

    MatchReport {
        section_analysis,
        keyword_relevance,
        job_keywords,
        resume_keywords,
        matched_keywords,
        missing_keywords,
        match_percentage,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
