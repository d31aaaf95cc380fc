//! Parser for the generative service's formatted rewrite reply.
//!
//! String-heuristic by necessity: the service returns natural language in a
//! requested layout, and real replies drift. The policy is lenient — a
//! malformed evaluation sub-section is skipped with a warning, never fatal —
//! except for the improved resume text, whose absence fails the whole parse.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use tracing::warn;

use crate::errors::AnalysisError;
use crate::rewrite::prompts::{
    BLOCK_DELIMITER, CHANGES_MARKER, EXPLANATION_MARKER, IMPROVED_RESUME_MARKER,
    SECTION_EVALUATION_MARKER,
};
use crate::rewrite::{RewriteResult, SectionEvaluation};

/// Matches enumerated change lines: "1. ", "12. " etc.
fn change_line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+\.\s+").expect("change line regex"))
}

/// Parses the raw service reply into a [`RewriteResult`].
///
/// Blocks are split on the literal [`BLOCK_DELIMITER`] and routed by marker
/// substring. A reply without improved-resume text is a
/// [`AnalysisError::Generation`] carrying the raw reply for diagnosis.
pub fn parse_structured_reply(raw_text: &str) -> Result<RewriteResult, AnalysisError> {
    let mut evaluations: BTreeMap<String, SectionEvaluation> = BTreeMap::new();
    let mut changes: Vec<String> = Vec::new();
    let mut improved_resume: Option<String> = None;
    let mut explanation: Option<String> = None;

    for block in raw_text.split(BLOCK_DELIMITER) {
        if block.contains(SECTION_EVALUATION_MARKER) {
            evaluations = parse_evaluation_block(block);
        } else if block.contains(CHANGES_MARKER) {
            changes = parse_changes_block(block);
        } else if block.contains(IMPROVED_RESUME_MARKER) {
            improved_resume = strip_marker(block, IMPROVED_RESUME_MARKER);
        } else if block.contains(EXPLANATION_MARKER) {
            explanation = strip_marker(block, EXPLANATION_MARKER);
        }
    }

    let improved_resume = improved_resume.ok_or_else(|| {
        AnalysisError::Generation(format!(
            "reply contained no improved resume text; raw reply: {raw_text}"
        ))
    })?;

    Ok(RewriteResult {
        improved_resume,
        changes,
        evaluations,
        explanation,
    })
}

/// Removes everything up to and including the marker (and a trailing colon),
/// returning the trimmed remainder. `None` when nothing is left.
fn strip_marker(block: &str, marker: &str) -> Option<String> {
    let idx = block.find(marker)?;
    let rest = block[idx + marker.len()..]
        .trim_start_matches(':')
        .trim()
        .to_string();
    if rest.is_empty() {
        None
    } else {
        Some(rest)
    }
}

/// The bullet group currently receiving lines within one section record.
#[derive(Clone, Copy)]
enum Category {
    Strengths,
    Improvements,
    Recommendations,
}

/// Parses the per-section evaluation block.
///
/// A line carrying a `**…**` pair and a parenthesized `Score:` opens a new
/// section record; category headers then route subsequent bullet lines.
/// Template placeholder lines (`[…]`) are discarded. A header-like line
/// without a parseable score drops its whole sub-section.
fn parse_evaluation_block(block: &str) -> BTreeMap<String, SectionEvaluation> {
    let mut evaluations: BTreeMap<String, SectionEvaluation> = BTreeMap::new();
    let mut current_section: Option<String> = None;
    let mut current_category = Category::Strengths;

    for line in block.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        // Template placeholders the model echoed back verbatim.
        if trimmed.starts_with('[') && trimmed.ends_with(']') {
            continue;
        }

        if looks_like_section_header(trimmed) {
            match parse_section_header(trimmed) {
                Some((name, score)) => {
                    evaluations.insert(
                        name.clone(),
                        SectionEvaluation {
                            score,
                            strengths: Vec::new(),
                            areas_for_improvement: Vec::new(),
                            recommendations: Vec::new(),
                        },
                    );
                    current_section = Some(name);
                    current_category = Category::Strengths;
                }
                None => {
                    warn!("skipping malformed evaluation sub-section: {trimmed}");
                    current_section = None;
                }
            }
            continue;
        }

        if trimmed.contains("Strengths:") {
            current_category = Category::Strengths;
            continue;
        }
        if trimmed.contains("Areas for Improvement:") {
            current_category = Category::Improvements;
            continue;
        }
        if trimmed.contains("Recommendations:") {
            current_category = Category::Recommendations;
            continue;
        }

        if let Some(bullet) = strip_bullet(trimmed) {
            if let Some(section) = &current_section {
                let entry = evaluations.get_mut(section).expect("active section exists");
                match current_category {
                    Category::Strengths => entry.strengths.push(bullet),
                    Category::Improvements => entry.areas_for_improvement.push(bullet),
                    Category::Recommendations => entry.recommendations.push(bullet),
                }
            }
        }
    }

    evaluations
}

/// A section header carries a bold-marker pair and an opening parenthesis.
fn looks_like_section_header(line: &str) -> bool {
    line.matches("**").count() >= 2 && line.contains('(')
}

/// Extracts `(name, "X/10")` from a line like `**Experience** (Score: 7/10)`.
/// Returns `None` when the parenthesized score is missing or non-numeric.
fn parse_section_header(line: &str) -> Option<(String, String)> {
    let open = line.find('(')?;
    let name = line[..open].replace("**", "").trim().to_string();
    if name.is_empty() {
        return None;
    }

    let slash = line[open..].find('/')? + open;
    let inside = line[open + 1..slash].trim();
    let numeric = inside.strip_prefix("Score:")?.trim();
    if numeric.is_empty() || !numeric.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    Some((name, format!("{numeric}/10")))
}

/// Strips a leading bullet symbol. Non-bullet lines return `None`.
fn strip_bullet(line: &str) -> Option<String> {
    for symbol in ["- ", "* ", "• "] {
        if let Some(rest) = line.strip_prefix(symbol) {
            return Some(rest.trim().to_string());
        }
    }
    None
}

/// Collects enumerated change descriptions, numeral prefixes stripped.
fn parse_changes_block(block: &str) -> Vec<String> {
    block
        .lines()
        .map(str::trim)
        .filter(|line| change_line_re().is_match(line))
        .map(|line| change_line_re().replace(line, "").trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELL_FORMED_REPLY: &str = "\
SECTION EVALUATION:

**Summary/Objective** (Score: 6/10)
Strengths:
- Clear positioning statement
Areas for Improvement:
- No mention of target role
Recommendations:
- Mirror the job title

**Experience** (Score: 8/10)
Strengths:
- Quantified outcomes
* Strong verbs
Areas for Improvement:
- Oldest role too detailed
Recommendations:
- Trim roles older than ten years

Overall Score: 7/10

---
CHANGES MADE:

1. Rewrote the summary around the target role
2. Quantified two experience bullets
3. Moved skills above education
4. Added a projects section
5. Removed an outdated certification

---
IMPROVED RESUME:

Jane Doe
Senior Backend Engineer
Experience with Python and Django.

---
EXPLANATION:

The resume now leads with the strongest signal for this role.";

    #[test]
    fn test_well_formed_reply_parses_fully() {
        let result = parse_structured_reply(WELL_FORMED_REPLY).unwrap();

        assert_eq!(result.evaluations.len(), 2);
        let summary = &result.evaluations["Summary/Objective"];
        assert_eq!(summary.score, "6/10");
        assert_eq!(summary.strengths, vec!["Clear positioning statement"]);
        assert_eq!(summary.areas_for_improvement, vec!["No mention of target role"]);
        assert_eq!(summary.recommendations, vec!["Mirror the job title"]);

        let experience = &result.evaluations["Experience"];
        assert_eq!(experience.score, "8/10");
        // both "-" and "*" bullets are collected
        assert_eq!(experience.strengths.len(), 2);

        assert_eq!(result.changes.len(), 5);
        assert_eq!(result.changes[0], "Rewrote the summary around the target role");

        assert!(result.improved_resume.starts_with("Jane Doe"));
        assert!(result
            .explanation
            .as_deref()
            .unwrap()
            .contains("strongest signal"));
    }

    #[test]
    fn test_missing_improved_resume_is_generation_error() {
        let reply = "SECTION EVALUATION:\n**Skills** (Score: 5/10)\n---\nCHANGES MADE:\n1. A change";
        let err = parse_structured_reply(reply).unwrap_err();
        match err {
            AnalysisError::Generation(msg) => assert!(msg.contains("no improved resume")),
            other => panic!("expected Generation, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_section_is_skipped_others_kept() {
        let reply = "\
SECTION EVALUATION:
**Summary/Objective** (Score: 6/10)
Strengths:
- Good opener
**Skills** (8/10)
Strengths:
- Orphaned bullet
**Education** (Score: 9/10)
Strengths:
- Relevant degree
---
IMPROVED RESUME:
Better text.";

        let result = parse_structured_reply(reply).unwrap();
        // "Skills" lacks "Score:" → omitted; its bullet is dropped too
        assert_eq!(result.evaluations.len(), 2);
        assert!(result.evaluations.contains_key("Summary/Objective"));
        assert!(result.evaluations.contains_key("Education"));
        assert_eq!(result.evaluations["Education"].strengths, vec!["Relevant degree"]);
    }

    #[test]
    fn test_placeholder_lines_are_discarded() {
        let reply = "\
SECTION EVALUATION:
**Experience** (Score: 7/10)
Strengths:
[strength one]
- Actual strength
---
IMPROVED RESUME:
Text.";
        let result = parse_structured_reply(reply).unwrap();
        assert_eq!(
            result.evaluations["Experience"].strengths,
            vec!["Actual strength"]
        );
    }

    #[test]
    fn test_changes_require_numeral_prefix() {
        let block = "CHANGES MADE:\n1. Kept\nNot a change line\n12. Also kept";
        let changes = parse_changes_block(block);
        assert_eq!(changes, vec!["Kept", "Also kept"]);
    }

    #[test]
    fn test_improved_resume_marker_text_removed_and_trimmed() {
        let reply = "IMPROVED RESUME:\n\n  The resume body.  \n";
        let result = parse_structured_reply(reply).unwrap();
        assert_eq!(result.improved_resume, "The resume body.");
    }

    #[test]
    fn test_section_header_parsing() {
        assert_eq!(
            parse_section_header("**Experience** (Score: 7/10)"),
            Some(("Experience".to_string(), "7/10".to_string()))
        );
        assert_eq!(parse_section_header("**Experience** (7/10)"), None);
        assert_eq!(parse_section_header("**Experience** (Score: abc/10)"), None);
    }

    #[test]
    fn test_bullets_before_any_section_are_ignored() {
        let reply = "\
SECTION EVALUATION:
- stray bullet
**Skills** (Score: 5/10)
Strengths:
- Kept
---
IMPROVED RESUME:
Text.";
        let result = parse_structured_reply(reply).unwrap();
        assert_eq!(result.evaluations["Skills"].strengths, vec!["Kept"]);
    }

    #[test]
    fn test_empty_reply_is_generation_error() {
        assert!(matches!(
            parse_structured_reply("").unwrap_err(),
            AnalysisError::Generation(_)
        ));
    }
}
