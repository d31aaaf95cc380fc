//! Section Segmenter — splits resume text into labeled sections by heading
//! heuristics.
//!
//! A small state machine: the state is the current section label, and a line
//! containing one of a section's heading synonyms (substring containment, not
//! whole word — intentionally over-eager, see the segmentation tests)
//! transitions into that section. Every non-blank line lands in exactly one
//! bucket.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The fixed resume section taxonomy.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SectionLabel {
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Other,
}

impl SectionLabel {
    /// All labels in declaration order (the order heading synonyms are tested).
    pub const ALL: [SectionLabel; 6] = [
        SectionLabel::Summary,
        SectionLabel::Experience,
        SectionLabel::Education,
        SectionLabel::Skills,
        SectionLabel::Projects,
        SectionLabel::Other,
    ];

    /// Heading synonyms that switch segmentation into this section.
    /// `Other` is the fall-through state and has none.
    fn heading_synonyms(self) -> &'static [&'static str] {
        match self {
            SectionLabel::Summary => &["summary", "profile", "objective"],
            SectionLabel::Experience => &["experience", "work history", "employment"],
            SectionLabel::Education => &["education", "academic", "qualification"],
            SectionLabel::Skills => &["skills", "technical skills", "competencies"],
            SectionLabel::Projects => &["projects", "portfolio", "achievements"],
            SectionLabel::Other => &[],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SectionLabel::Summary => "summary",
            SectionLabel::Experience => "experience",
            SectionLabel::Education => "education",
            SectionLabel::Skills => "skills",
            SectionLabel::Projects => "projects",
            SectionLabel::Other => "other",
        }
    }
}

impl std::fmt::Display for SectionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the section a (lowercased) line transitions into, if any.
fn heading_transition(line: &str) -> Option<SectionLabel> {
    for label in SectionLabel::ALL {
        if label
            .heading_synonyms()
            .iter()
            .any(|synonym| line.contains(synonym))
        {
            return Some(label);
        }
    }
    None
}

/// Segments resume text into per-section line buckets.
///
/// The text is lowercased and scanned line by line; blank lines are skipped.
/// A line containing a heading synonym switches the current section and is
/// itself appended to the new bucket. Lines before the first heading land in
/// [`SectionLabel::Other`]. Only sections that received at least one line
/// appear in the returned map.
pub fn segment(resume_text: &str) -> BTreeMap<SectionLabel, Vec<String>> {
    let mut buckets: BTreeMap<SectionLabel, Vec<String>> = BTreeMap::new();
    let mut current = SectionLabel::Other;

    for line in resume_text.to_lowercase().lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(next) = heading_transition(line) {
            current = next;
        }

        buckets.entry(current).or_default().push(line.to_string());
    }

    buckets
}
