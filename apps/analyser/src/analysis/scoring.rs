//! Match Scorer — blends a learned-model probability with a skill-overlap
//! ratio into a final match score and confidence band.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::skills::extract_skills;
use crate::errors::AnalysisError;
use crate::models::predictor::{MatchFeatures, ResumeModel};

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Coarse confidence tier derived from the final probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    /// Band boundaries are exclusive of the lower bound: 0.7 is Medium,
    /// 0.4 is Low.
    pub fn from_probability(probability: f64) -> Self {
        if probability > 0.7 {
            Confidence::High
        } else if probability > 0.4 {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }
}

/// Final match score for a resume against a job description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchScore {
    /// (model probability + skill match ratio) / 2, in [0, 1].
    pub probability: f64,
    pub confidence: Confidence,
    /// Skills detected in the resume, in vocabulary order.
    pub skills_found: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring
// ────────────────────────────────────────────────────────────────────────────

/// Scores a resume against a job description using the supplied model.
///
/// The model is an explicit parameter: `None` means no active trained model
/// exists and surfaces as [`AnalysisError::ModelUnavailable`]; a failing
/// prediction surfaces as [`AnalysisError::Prediction`].
pub fn score(
    resume_text: &str,
    job_description: &str,
    model: Option<&dyn ResumeModel>,
) -> Result<MatchScore, AnalysisError> {
    let model = model.ok_or(AnalysisError::ModelUnavailable)?;

    let resume_skills = extract_skills(resume_text);
    let job_skills = extract_skills(job_description);

    let resume_set: HashSet<&str> = resume_skills.iter().map(String::as_str).collect();
    let job_set: HashSet<&str> = job_skills.iter().map(String::as_str).collect();

    let skill_match_ratio = if job_set.is_empty() {
        0.0
    } else {
        resume_set.intersection(&job_set).count() as f64 / job_set.len() as f64
    };

    let features = build_features(resume_text, &resume_skills);

    let model_probability = model
        .predict_probability(&features)
        .map_err(|e| AnalysisError::Prediction(e.to_string()))?;
    if !(0.0..=1.0).contains(&model_probability) {
        return Err(AnalysisError::Prediction(format!(
            "model returned probability outside [0, 1]: {model_probability}"
        )));
    }

    let probability = (model_probability + skill_match_ratio) / 2.0;

    debug!(
        model_probability,
        skill_match_ratio, probability, "match score computed"
    );

    Ok(MatchScore {
        probability,
        confidence: Confidence::from_probability(probability),
        skills_found: resume_skills,
    })
}

/// Builds the feature record the model expects: joined skill text plus crude
/// experience/project proxies and a placeholder salary.
fn build_features(resume_text: &str, resume_skills: &[String]) -> MatchFeatures {
    let word_count = resume_text.split_whitespace().count();
    let project_mentions = resume_text.to_lowercase().matches("project").count();

    MatchFeatures {
        skills: resume_skills.join(", "),
        experience: word_count as f64 / 100.0,
        projects: project_mentions as f64,
        salary: 0.0,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// Test model returning a fixed probability.
    struct FixedModel(f64);

    impl ResumeModel for FixedModel {
        fn predict_probability(&self, _features: &MatchFeatures) -> anyhow::Result<f64> {
            Ok(self.0)
        }
    }

    /// Test model that always fails.
    struct BrokenModel;

    impl ResumeModel for BrokenModel {
        fn predict_probability(&self, _features: &MatchFeatures) -> anyhow::Result<f64> {
            anyhow::bail!("weights file corrupted")
        }
    }

    const RESUME: &str = "Seasoned python and django engineer, delivered a project.";
    const JOB: &str = "Looking for python and django skills.";

    #[test]
    fn test_confidence_band_boundaries() {
        // Lower bounds are exclusive.
        assert_eq!(Confidence::from_probability(0.71), Confidence::High);
        assert_eq!(Confidence::from_probability(0.7), Confidence::Medium);
        assert_eq!(Confidence::from_probability(0.4), Confidence::Low);
        assert_eq!(Confidence::from_probability(0.0), Confidence::Low);
        assert_eq!(Confidence::from_probability(1.0), Confidence::High);
    }

    #[test]
    fn test_missing_model_is_model_unavailable() {
        let err = score(RESUME, JOB, None).unwrap_err();
        assert!(matches!(err, AnalysisError::ModelUnavailable));
    }

    #[test]
    fn test_failing_model_is_prediction_error() {
        let err = score(RESUME, JOB, Some(&BrokenModel)).unwrap_err();
        match err {
            AnalysisError::Prediction(msg) => assert!(msg.contains("corrupted")),
            other => panic!("expected Prediction, got {other:?}"),
        }
    }

    #[test]
    fn test_out_of_range_probability_is_prediction_error() {
        let err = score(RESUME, JOB, Some(&FixedModel(1.5))).unwrap_err();
        assert!(matches!(err, AnalysisError::Prediction(_)));
    }

    #[test]
    fn test_final_probability_averages_model_and_ratio() {
        // Resume covers both job skills (python, django) → ratio 1.0.
        let result = score(RESUME, JOB, Some(&FixedModel(0.6))).unwrap();
        assert!((result.probability - 0.8).abs() < 1e-12);
        assert_eq!(result.confidence, Confidence::High);
    }

    #[test]
    fn test_empty_job_skills_halves_model_probability() {
        let result = score(RESUME, "No recognizable technologies here.", Some(&FixedModel(0.9)))
            .unwrap();
        assert!((result.probability - 0.45).abs() < 1e-12);
        assert_eq!(result.confidence, Confidence::Medium);
    }

    #[test]
    fn test_skills_found_come_from_resume() {
        let result = score(RESUME, JOB, Some(&FixedModel(0.5))).unwrap();
        assert!(result.skills_found.contains(&"python".to_string()));
        assert!(result.skills_found.contains(&"django".to_string()));
    }

    #[test]
    fn test_feature_proxies() {
        let features = build_features(
            "word ".repeat(200).trim(),
            &["python".to_string(), "django".to_string()],
        );
        assert!((features.experience - 2.0).abs() < 1e-12);
        assert_eq!(features.salary, 0.0);
        assert_eq!(features.skills, "python, django");

        let features = build_features("Project work on projects", &[]);
        // substring count: "project" occurs in both words
        assert_eq!(features.projects, 2.0);
    }
}
