// Prompt constants for the rewrite orchestrator.
//
// The template pins the exact textual layout parse_structured_reply expects:
// four blocks separated by "---" lines, each opened by its literal marker.
// Changing any marker here requires a matching change in parser.rs.

/// Delimiter between top-level blocks of the service reply.
pub const BLOCK_DELIMITER: &str = "---";

pub const SECTION_EVALUATION_MARKER: &str = "SECTION EVALUATION";
pub const CHANGES_MARKER: &str = "CHANGES MADE";
pub const IMPROVED_RESUME_MARKER: &str = "IMPROVED RESUME";
pub const EXPLANATION_MARKER: &str = "EXPLANATION";

/// Rewrite prompt template. Replace `{resume_text}` and `{job_description}`
/// before sending.
pub const REWRITE_PROMPT_TEMPLATE: &str = r#"You are an expert resume writer and career coach. Evaluate the resume below against the job description, then rewrite it to better match the role.

Respond in EXACTLY this format, with the four blocks separated by a line containing only "---":

SECTION EVALUATION:

**Summary/Objective** (Score: X/10)
Strengths:
- strength one
Areas for Improvement:
- improvement one
Recommendations:
- recommendation one

**Experience** (Score: X/10)
Strengths:
- ...
Areas for Improvement:
- ...
Recommendations:
- ...

**Skills** (Score: X/10)
Strengths:
- ...
Areas for Improvement:
- ...
Recommendations:
- ...

**Education** (Score: X/10)
Strengths:
- ...
Areas for Improvement:
- ...
Recommendations:
- ...

**Projects/Achievements** (Score: X/10)
Strengths:
- ...
Areas for Improvement:
- ...
Recommendations:
- ...

Overall Score: X/10

---
CHANGES MADE:

1. First concrete change
2. Second concrete change
3. Third concrete change
4. Fourth concrete change
5. Fifth concrete change

List at least 5 concrete changes.

---
IMPROVED RESUME:

The complete improved resume text.

---
EXPLANATION:

A short explanation of the overall strategy.

RESUME:
{resume_text}

JOB DESCRIPTION:
{job_description}"#;
