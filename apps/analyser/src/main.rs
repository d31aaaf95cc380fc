use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use analyser::analysis::{keyword_match, scoring};
use analyser::config::Config;
use analyser::llm_client::OllamaClient;
use analyser::models::predictor::{LinearModel, ResumeModel};
use analyser::rewrite;

/// Match a resume against a job description: keyword report, match score,
/// and optionally a rewritten resume from the generative service.
#[derive(Debug, Parser)]
#[command(name = "analyser", version)]
struct Args {
    /// Path to the resume as plain text (decode PDFs/DOCX upstream).
    resume: PathBuf,

    /// Path to the job description as plain text.
    job_description: PathBuf,

    /// JSON weights file for the linear match model. Without it the match
    /// score is skipped and only the keyword report is produced.
    #[arg(long)]
    model: Option<PathBuf>,

    /// Also ask the generative service for an improved resume.
    #[arg(long)]
    rewrite: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let resume_text = std::fs::read_to_string(&args.resume)
        .with_context(|| format!("failed to read resume {}", args.resume.display()))?;
    let job_description = std::fs::read_to_string(&args.job_description)
        .with_context(|| format!("failed to read job description {}", args.job_description.display()))?;

    // Keyword analysis and scoring are independent; run both over the input.
    let report = keyword_match::analyze(&resume_text, &job_description);
    info!(
        match_percentage = report.match_percentage,
        matched = report.matched_keywords.len(),
        missing = report.missing_keywords.len(),
        "keyword analysis complete"
    );

    let match_score = match &args.model {
        Some(path) => {
            let weights = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read model weights {}", path.display()))?;
            let model: LinearModel =
                serde_json::from_str(&weights).context("invalid model weights JSON")?;
            Some(scoring::score(
                &resume_text,
                &job_description,
                Some(&model as &dyn ResumeModel),
            )?)
        }
        None => {
            warn!("no --model supplied; skipping match score");
            None
        }
    };

    let rewrite_result = if args.rewrite {
        let client = OllamaClient::new(
            config.ollama_url.clone(),
            config.generation_model.clone(),
            config.generation_timeout_secs,
        )?;
        info!(model = %config.generation_model, "requesting rewrite");
        Some(rewrite::rewrite(&resume_text, &job_description, &client).await?)
    } else {
        None
    };

    let output = json!({
        "keyword_report": report,
        "match_score": match_score,
        "rewrite": rewrite_result,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
