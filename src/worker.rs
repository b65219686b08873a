//! Background proof jobs on the tokio blocking pool.
//!
//! The search itself is synchronous. [`spawn_proof`] moves it off the async
//! executor and reports progress over a channel.

use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::prover::{ProofOutcome, Prover};

/// Progress of a proof job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Started { formulas: usize },
    Finished { proved: bool, steps: usize },
}

#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("proof worker failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Handle to a running proof.
pub struct ProofJob {
    handle: JoinHandle<ProofOutcome>,
    status: mpsc::UnboundedReceiver<Status>,
}

impl ProofJob {
    /// Next status message, or `None` once the worker has finished and all
    /// messages were read.
    pub async fn next_status(&mut self) -> Option<Status> {
        self.status.recv().await
    }

    /// Wait for the outcome. Unread status messages are discarded.
    pub async fn wait(self) -> Result<ProofOutcome, WorkerError> {
        Ok(self.handle.await?)
    }
}

/// Run `prover` over `formulas` on a blocking thread.
///
/// Must be called from within a tokio runtime.
pub fn spawn_proof(prover: Prover, formulas: Vec<String>) -> ProofJob {
    let (tx, rx) = mpsc::unbounded_channel();
    let handle = tokio::task::spawn_blocking(move || {
        tx.send(Status::Started {
            formulas: formulas.len(),
        })
        .ok();
        let outcome = prover.prove(&formulas);
        debug!(proved = outcome.proved, "proof job done");
        tx.send(Status::Finished {
            proved: outcome.proved,
            steps: outcome.stats.steps,
        })
        .ok();
        outcome
    });
    ProofJob { handle, status: rx }
}
