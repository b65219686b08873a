//! Proof trace: the numbered, human-readable record of a proof attempt.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A significant engine action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TraceEvent {
    /// An input formula produced a clause.
    ClauseAdded { clause: String },
    /// An input formula produced a clause that was already known.
    DuplicateClause { clause: String },
    /// An input formula was rejected and skipped.
    ParseFailed { formula: String, error: String },
    /// Nothing survived parsing.
    NoUsableClauses,
    /// A resolution step that produced a new clause (or `◻`).
    Resolution {
        left: String,
        right: String,
        resolvent: String,
    },
    /// The empty clause was derived.
    Contradiction,
    /// Both queues ran dry.
    SupplyExhausted { steps: usize },
    /// The step budget ran out.
    StepLimitReached { max_steps: usize },
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEvent::ClauseAdded { clause } => write!(f, "Added clause: {}", clause),
            TraceEvent::DuplicateClause { clause } => {
                write!(f, "Duplicate clause ignored: {}", clause)
            }
            TraceEvent::ParseFailed { formula, error } => {
                write!(f, "Failed to parse formula '{}': {}", formula, error)
            }
            TraceEvent::NoUsableClauses => write!(f, "No usable clauses for the proof"),
            TraceEvent::Resolution {
                left,
                right,
                resolvent,
            } => write!(f, "Resolution: {} and {} -> {}", left, right, resolvent),
            TraceEvent::Contradiction => write!(f, "Contradiction found! Proof complete."),
            TraceEvent::SupplyExhausted { steps } => write!(
                f,
                "Clause supply exhausted after {} steps. No contradiction found.",
                steps
            ),
            TraceEvent::StepLimitReached { max_steps } => write!(
                f,
                "Step limit of {} reached. No contradiction found.",
                max_steps
            ),
        }
    }
}

/// One numbered trace entry, rendered as `Step <n>: <message>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceStep {
    pub number: usize,
    #[serde(flatten)]
    pub event: TraceEvent,
}

impl fmt::Display for TraceStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {}: {}", self.number, self.event)
    }
}

/// Append-only sequence of trace steps, numbered from 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProofTrace {
    steps: Vec<TraceStep>,
}

impl ProofTrace {
    pub fn new() -> Self {
        ProofTrace::default()
    }

    /// Append an event and return its step number.
    pub fn record(&mut self, event: TraceEvent) -> usize {
        let number = self.steps.len() + 1;
        self.steps.push(TraceStep { number, event });
        number
    }

    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }

    pub fn events(&self) -> impl Iterator<Item = &TraceEvent> {
        self.steps.iter().map(|s| &s.event)
    }

    pub fn last(&self) -> Option<&TraceStep> {
        self.steps.last()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The rendered `Step <n>: <message>` lines.
    pub fn lines(&self) -> Vec<String> {
        self.steps.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for ProofTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            writeln!(f, "{}", step)?;
        }
        Ok(())
    }
}
