use thiserror::Error;

/// Errors surfaced by the fallible pipeline stages (scoring and rewrite).
///
/// The extractors, segmenter, and keyword analyzer are total: degenerate
/// input yields zero-valued reports, never an error.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("no active trained model was supplied")]
    ModelUnavailable,

    #[error("model prediction failed: {0}")]
    Prediction(String),

    #[error("generation failed: {0}")]
    Generation(String),
}
