//! Prover configuration.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::syntax::Clause;
use crate::unify::UnifierMode;

/// Iteration budget used when none is configured.
pub const DEFAULT_MAX_STEPS: usize = 50;

/// How many resolvents one clause pair contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairSelection {
    /// Resolve on the first complementary, unifiable literal pair only.
    #[default]
    FirstMatch,
    /// Resolve on every complementary, unifiable literal pair.
    All,
}

/// Key used to decide whether a derived clause is already known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DedupMode {
    /// The clause's canonical string; literal order matters.
    #[default]
    Canonical,
    /// The sorted set of literal strings; literal order and repeats do not matter.
    LiteralSet,
}

impl DedupMode {
    pub fn key(self, clause: &Clause) -> String {
        match self {
            DedupMode::Canonical => clause.canonical(),
            DedupMode::LiteralSet => clause.literal_set_key(),
        }
    }
}

/// Configuration for one prover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProverConfig {
    /// Maximum number of pivot clauses processed before giving up.
    pub max_steps: usize,
    /// Unification algorithm used by the resolver.
    pub unifier: UnifierMode,
    /// Resolution pair selection.
    pub pair_selection: PairSelection,
    /// Duplicate detection key for the working clause set.
    pub dedup: DedupMode,
}

impl Default for ProverConfig {
    fn default() -> Self {
        ProverConfig {
            max_steps: DEFAULT_MAX_STEPS,
            unifier: UnifierMode::default(),
            pair_selection: PairSelection::default(),
            dedup: DedupMode::default(),
        }
    }
}

/// Errors raised while building or updating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown setting '{0}'")]
    UnknownKey(String),
    #[error("invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),
}

impl ProverConfig {
    /// Parse a JSON configuration. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: ProverConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_steps == 0 {
            return Err(ConfigError::InvalidValue {
                key: "max_steps".to_string(),
                value: "0".to_string(),
                reason: "the step budget must be positive".to_string(),
            });
        }
        Ok(())
    }

    /// Update one field from its textual form, e.g. `("max_steps", "100")`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason,
        };

        let mut updated = self.clone();
        match key {
            "max_steps" => {
                updated.max_steps = value
                    .parse::<usize>()
                    .map_err(|e| invalid(e.to_string()))?;
            }
            "unifier" => updated.unifier = value.parse::<UnifierMode>().map_err(invalid)?,
            "pair_selection" => {
                updated.pair_selection = value.parse::<PairSelection>().map_err(invalid)?
            }
            "dedup" => updated.dedup = value.parse::<DedupMode>().map_err(invalid)?,
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Settings as `(key, value)` pairs, in declaration order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("max_steps", self.max_steps.to_string()),
            ("unifier", self.unifier.to_string()),
            ("pair_selection", self.pair_selection.to_string()),
            ("dedup", self.dedup.to_string()),
        ]
    }
}

impl FromStr for PairSelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first_match" | "first-match" => Ok(PairSelection::FirstMatch),
            "all" => Ok(PairSelection::All),
            other => Err(format!("unknown pair selection '{}'", other)),
        }
    }
}

impl fmt::Display for PairSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PairSelection::FirstMatch => write!(f, "first_match"),
            PairSelection::All => write!(f, "all"),
        }
    }
}

impl FromStr for DedupMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "canonical" => Ok(DedupMode::Canonical),
            "literal_set" | "literal-set" => Ok(DedupMode::LiteralSet),
            other => Err(format!("unknown dedup mode '{}'", other)),
        }
    }
}

impl fmt::Display for DedupMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DedupMode::Canonical => write!(f, "canonical"),
            DedupMode::LiteralSet => write!(f, "literal_set"),
        }
    }
}
