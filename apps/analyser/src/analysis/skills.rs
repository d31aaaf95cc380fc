//! Skill Extractor — scans text against a fixed technology vocabulary.

use std::sync::OnceLock;

use regex::Regex;

/// The controlled skill vocabulary. Matching is case-insensitive and
/// whole-word; results come back in vocabulary order, so multi-word and
/// single-word entries coexist without double counting.
pub const SKILL_VOCABULARY: &[&str] = &[
    "python", "java", "javascript", "c++", "c#", "ruby", "php",
    "html", "css", "sql", "nosql", "mongodb", "postgresql", "mysql",
    "aws", "azure", "gcp", "docker", "kubernetes", "react", "angular",
    "vue", "node", "django", "flask", "spring", "tensorflow", "pytorch",
    "machine learning", "deep learning", "ai", "artificial intelligence",
    "data science", "big data", "hadoop", "spark", "scala", "r",
    "git", "agile", "scrum", "devops", "ci/cd", "jenkins", "linux",
    "unix", "windows", "macos", "ios", "android", "mobile development",
    "web development", "frontend", "backend", "full stack", "cloud",
    "security", "cybersecurity", "networking", "blockchain", "iot",
];

/// One compiled `\b<term>\b` matcher per vocabulary entry, built on first use.
fn skill_matchers() -> &'static Vec<(&'static str, Regex)> {
    static MATCHERS: OnceLock<Vec<(&'static str, Regex)>> = OnceLock::new();
    MATCHERS.get_or_init(|| {
        SKILL_VOCABULARY
            .iter()
            .map(|term| {
                let pattern = format!(r"\b{}\b", regex::escape(term));
                // Patterns are built from a fixed vocabulary; compilation
                // cannot fail at runtime for these inputs.
                (*term, Regex::new(&pattern).expect("vocabulary regex"))
            })
            .collect()
    })
}

/// Extracts known skills from free text.
///
/// Lowercases the input and tests each vocabulary term with a whole-word
/// regex. Matches are returned in vocabulary order; duplicates are impossible
/// because the scan is driven by the vocabulary, not by input occurrences.
pub fn extract_skills(text: &str) -> Vec<String> {
    let text_lower = text.to_lowercase();
    skill_matchers()
        .iter()
        .filter(|(_, re)| re.is_match(&text_lower))
        .map(|(term, _)| (*term).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_word_match_only() {
        // "java" must not match inside "javascript"
        let skills = extract_skills("I write javascript daily");
        assert!(skills.contains(&"javascript".to_string()));
        assert!(!skills.contains(&"java".to_string()));
    }

    #[test]
    fn test_case_insensitive() {
        let skills = extract_skills("Expert in PYTHON and Docker");
        assert!(skills.contains(&"python".to_string()));
        assert!(skills.contains(&"docker".to_string()));
    }

    #[test]
    fn test_vocabulary_order_not_input_order() {
        let skills = extract_skills("kubernetes before python here");
        // python precedes kubernetes in the vocabulary
        let py = skills.iter().position(|s| s == "python").unwrap();
        let k8s = skills.iter().position(|s| s == "kubernetes").unwrap();
        assert!(py < k8s);
    }

    #[test]
    fn test_multi_word_terms_match() {
        let skills = extract_skills("Focus on machine learning and data science");
        assert!(skills.contains(&"machine learning".to_string()));
        assert!(skills.contains(&"data science".to_string()));
    }

    #[test]
    fn test_no_duplicates_for_repeated_mentions() {
        let skills = extract_skills("python python python");
        assert_eq!(skills, vec!["python"]);
    }

    #[test]
    fn test_empty_text_yields_empty_list() {
        assert!(extract_skills("").is_empty());
    }

    #[test]
    fn test_single_letter_skill_is_whole_word() {
        // "r" matches as a standalone token, not inside "rust"
        assert_eq!(extract_skills("proficient in r"), vec!["r"]);
        assert!(extract_skills("proficient in rust").is_empty());
    }
}
