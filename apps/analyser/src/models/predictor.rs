//! Trained-model seam for the Match Scorer.
//!
//! The scorer takes the model by explicit parameter — no process-wide
//! "active model" lookup. Obtaining and persisting model records stays
//! outside this crate; [`ModelRecord`] only mirrors the stored shape and
//! [`LinearModel`] gives the seam a shippable, serde-loadable default.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Feature record handed to a [`ResumeModel`] for prediction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchFeatures {
    /// Detected resume skills, comma-joined.
    pub skills: String,
    /// Crude experience proxy: resume word count / 100.
    pub experience: f64,
    /// Crude project proxy: occurrences of the literal "project".
    pub projects: f64,
    /// Placeholder — always 0.0 at prediction time.
    pub salary: f64,
}

/// An opaque trained model: given a feature record, returns the
/// positive-class probability in [0, 1].
pub trait ResumeModel: Send + Sync {
    fn predict_probability(&self, features: &MatchFeatures) -> anyhow::Result<f64>;
}

/// Metadata row for a persisted model. Storage and retraining are external;
/// callers pass the loaded model into the scorer directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelRecord {
    pub name: String,
    pub accuracy: Option<f64>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Picks the newest active record, matching the external store's
/// newest-first ordering.
pub fn active_record(records: &[ModelRecord]) -> Option<&ModelRecord> {
    records
        .iter()
        .filter(|r| r.is_active)
        .max_by_key(|r| r.created_at)
}

/// A minimal linear model over [`MatchFeatures`], squashed through a sigmoid.
///
/// Weights are serde-loadable from JSON so the CLI can ship with a fixed
/// weight file. This is a supplementary signal, not a real classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    pub skill_weight: f64,
    pub experience_weight: f64,
    pub projects_weight: f64,
    pub salary_weight: f64,
    pub bias: f64,
}

impl LinearModel {
    fn skill_count(features: &MatchFeatures) -> f64 {
        features
            .skills
            .split(',')
            .filter(|s| !s.trim().is_empty())
            .count() as f64
    }
}

impl ResumeModel for LinearModel {
    fn predict_probability(&self, features: &MatchFeatures) -> anyhow::Result<f64> {
        let z = self.skill_weight * Self::skill_count(features)
            + self.experience_weight * features.experience
            + self.projects_weight * features.projects
            + self.salary_weight * features.salary
            + self.bias;
        Ok(1.0 / (1.0 + (-z).exp()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn features(skills: &str) -> MatchFeatures {
        MatchFeatures {
            skills: skills.to_string(),
            experience: 1.5,
            projects: 2.0,
            salary: 0.0,
        }
    }

    #[test]
    fn test_linear_model_probability_in_unit_interval() {
        let model = LinearModel {
            skill_weight: 0.4,
            experience_weight: 0.2,
            projects_weight: 0.1,
            salary_weight: 0.0,
            bias: -1.0,
        };
        let p = model.predict_probability(&features("python, django")).unwrap();
        assert!((0.0..=1.0).contains(&p));
    }

    #[test]
    fn test_more_skills_means_higher_probability() {
        let model = LinearModel {
            skill_weight: 0.5,
            experience_weight: 0.0,
            projects_weight: 0.0,
            salary_weight: 0.0,
            bias: 0.0,
        };
        let few = model.predict_probability(&features("python")).unwrap();
        let many = model
            .predict_probability(&features("python, django, docker, aws"))
            .unwrap();
        assert!(many > few);
    }

    #[test]
    fn test_empty_skills_count_as_zero() {
        assert_eq!(LinearModel::skill_count(&features("")), 0.0);
        assert_eq!(LinearModel::skill_count(&features("python, django")), 2.0);
    }

    #[test]
    fn test_linear_model_deserializes_from_json() {
        let json = r#"{
            "skill_weight": 0.4,
            "experience_weight": 0.2,
            "projects_weight": 0.1,
            "salary_weight": 0.0,
            "bias": -0.5
        }"#;
        let model: LinearModel = serde_json::from_str(json).unwrap();
        assert!((model.bias - (-0.5)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_active_record_prefers_newest_active() {
        let records = vec![
            ModelRecord {
                name: "old".to_string(),
                accuracy: Some(0.8),
                is_active: true,
                created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            },
            ModelRecord {
                name: "inactive".to_string(),
                accuracy: Some(0.9),
                is_active: false,
                created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            },
            ModelRecord {
                name: "current".to_string(),
                accuracy: Some(0.85),
                is_active: true,
                created_at: Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
            },
        ];
        assert_eq!(active_record(&records).unwrap().name, "current");
    }

    #[test]
    fn test_active_record_none_when_all_inactive() {
        let records = vec![ModelRecord {
            name: "retired".to_string(),
            accuracy: None,
            is_active: false,
            created_at: Utc::now(),
        }];
        assert!(active_record(&records).is_none());
    }
}
