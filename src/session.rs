//! Session: accumulated formulas, prover configuration and the last result.

use std::fmt;
use std::path::Path;

use thiserror::Error;

use crate::parser::{parse_formula, ParseError};
use crate::prover::{ConfigError, ProofOutcome, Prover, ProverConfig};

/// Result of a state-changing session call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecResult {
    /// A formula was accepted; `clause` is its clause form.
    FormulaAdded { index: usize, clause: String },
    /// A configuration field changed.
    OptionSet { key: String, value: String },
    /// Settings were replaced from a file.
    ConfigLoaded { path: String },
    /// The formula list was emptied.
    Cleared { removed: usize },
}

impl fmt::Display for ExecResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecResult::FormulaAdded { index, clause } => write!(f, "[{}] {}", index, clause),
            ExecResult::OptionSet { key, value } => write!(f, "{} = {}", key, value),
            ExecResult::ConfigLoaded { path } => write!(f, "Loaded settings from {}.", path),
            ExecResult::Cleared { removed } => write!(f, "Removed {} formula(s).", removed),
        }
    }
}

/// Session error.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("cannot parse '{formula}': {source}")]
    Parse {
        formula: String,
        #[source]
        source: ParseError,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("no proof has been run yet")]
    NoOutcome,
    #[error("cannot export outcome: {0}")]
    Export(#[from] serde_json::Error),
}

/// Formulas waiting to be proved together, plus the prover settings.
#[derive(Debug, Clone, Default)]
pub struct Session {
    formulas: Vec<String>,
    config: ProverConfig,
    last_outcome: Option<ProofOutcome>,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    pub fn with_config(config: ProverConfig) -> Self {
        Session {
            config,
            ..Session::default()
        }
    }

    /// Load settings from a JSON file, replacing the current ones.
    pub fn load_config(&mut self, path: impl AsRef<Path>) -> Result<ExecResult, SessionError> {
        let path = path.as_ref();
        self.config = ProverConfig::from_json_file(path)?;
        Ok(ExecResult::ConfigLoaded {
            path: path.display().to_string(),
        })
    }

    /// Add a formula. It must parse; the clause form is returned.
    pub fn add_formula(&mut self, formula: &str) -> Result<ExecResult, SessionError> {
        let formula = formula.trim();
        let clause = parse_formula(formula).map_err(|source| SessionError::Parse {
            formula: formula.to_string(),
            source,
        })?;
        self.formulas.push(formula.to_string());
        Ok(ExecResult::FormulaAdded {
            index: self.formulas.len(),
            clause: clause.to_string(),
        })
    }

    /// Prove the accumulated formulas with the current settings.
    pub fn prove(&mut self) -> &ProofOutcome {
        let outcome = Prover::new(self.config.clone()).prove(&self.formulas);
        self.last_outcome.insert(outcome)
    }

    /// Update the configuration from a key/value pair.
    pub fn set_option(&mut self, key: &str, value: &str) -> Result<ExecResult, SessionError> {
        self.config.set(key, value)?;
        Ok(ExecResult::OptionSet {
            key: key.to_string(),
            value: value.to_string(),
        })
    }

    pub fn clear(&mut self) -> ExecResult {
        let removed = self.formulas.len();
        self.formulas.clear();
        self.last_outcome = None;
        ExecResult::Cleared { removed }
    }

    pub fn formulas(&self) -> &[String] {
        &self.formulas
    }

    pub fn config(&self) -> &ProverConfig {
        &self.config
    }

    pub fn last_outcome(&self) -> Option<&ProofOutcome> {
        self.last_outcome.as_ref()
    }

    /// The last outcome as pretty-printed JSON.
    pub fn last_outcome_json(&self) -> Result<String, SessionError> {
        let outcome = self.last_outcome.as_ref().ok_or(SessionError::NoOutcome)?;
        Ok(serde_json::to_string_pretty(outcome)?)
    }
}
