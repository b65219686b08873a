//! Text-to-proof pipeline: formalize, prove, explain.
//!
//! [`Formalizer`] and [`Explainer`] are the seams for external translators
//! (for example a language model turning prose into formulas and a trace
//! back into prose). The crate ships plain-text implementations of both.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::prover::{ProofOutcome, Prover};
use crate::worker::{spawn_proof, WorkerError};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("formalization failed: {0}")]
    Formalize(String),
    #[error("explanation failed: {0}")]
    Explain(String),
    #[error(transparent)]
    Worker(#[from] WorkerError),
}

/// Turns input text into formula strings.
pub trait Formalizer: Send + Sync {
    fn formalize(&self, text: &str) -> Result<Vec<String>, PipelineError>;
}

/// Turns a finished proof into an explanation.
pub trait Explainer: Send + Sync {
    fn explain(&self, request: &ExplanationRequest) -> Result<String, PipelineError>;
}

/// Everything an [`Explainer`] receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplanationRequest {
    pub input_text: String,
    pub trace: Vec<String>,
    pub proved: bool,
}

/// Reads one formula per line; `;` also separates formulas. Blank entries
/// and lines starting with `#` are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineFormalizer;

impl Formalizer for LineFormalizer {
    fn formalize(&self, text: &str) -> Result<Vec<String>, PipelineError> {
        Ok(text
            .lines()
            .map(str::trim)
            .filter(|line| !line.starts_with('#'))
            .flat_map(|line| line.split(';'))
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(str::to_string)
            .collect())
    }
}

/// Explains a proof by restating its verdict and resolution steps.
#[derive(Debug, Clone, Copy, Default)]
pub struct TraceExplainer;

impl Explainer for TraceExplainer {
    fn explain(&self, request: &ExplanationRequest) -> Result<String, PipelineError> {
        let resolutions: Vec<&str> = request
            .trace
            .iter()
            .filter_map(|line| line.split_once(": Resolution: ").map(|(_, step)| step))
            .collect();

        let mut text = if request.proved {
            "The premises together with the negated goal are contradictory, so the goal follows."
                .to_string()
        } else {
            "No contradiction was found; the goal does not follow within the search budget."
                .to_string()
        };
        if !resolutions.is_empty() {
            text.push_str("\nDerivation:");
            for (i, step) in resolutions.iter().enumerate() {
                text.push_str(&format!("\n  {}. {}", i + 1, step));
            }
        }
        Ok(text)
    }
}

/// Result of one pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    pub formulas: Vec<String>,
    pub outcome: ProofOutcome,
    pub explanation: String,
}

pub struct Pipeline<F, E> {
    formalizer: F,
    explainer: E,
    prover: Prover,
}

impl Pipeline<LineFormalizer, TraceExplainer> {
    /// Plain-text pipeline with the given prover.
    pub fn plain(prover: Prover) -> Self {
        Pipeline::new(LineFormalizer, TraceExplainer, prover)
    }
}

impl<F: Formalizer, E: Explainer> Pipeline<F, E> {
    pub fn new(formalizer: F, explainer: E, prover: Prover) -> Self {
        Pipeline {
            formalizer,
            explainer,
            prover,
        }
    }

    pub async fn run(&self, text: &str) -> Result<PipelineReport, PipelineError> {
        let formulas = self.formalizer.formalize(text)?;
        info!(formulas = formulas.len(), "formalized input");

        let outcome = spawn_proof(self.prover.clone(), formulas.clone())
            .wait()
            .await?;
        info!(proved = outcome.proved, "proof finished");

        let request = ExplanationRequest {
            input_text: text.to_string(),
            trace: outcome.trace_lines(),
            proved: outcome.proved,
        };
        let explanation = self.explainer.explain(&request)?;

        Ok(PipelineReport {
            formulas,
            outcome,
            explanation,
        })
    }
}
