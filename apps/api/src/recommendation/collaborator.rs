use std::future::Future;
use std::time::Duration;

use thiserror::Error;
use tokio::time::{timeout_at, Instant};

use crate::store::StoreError;

/// A collaborator read that failed or ran past the request deadline.
/// Orchestrators log it and degrade to an empty result.
#[derive(Debug, Error)]
pub enum CollaboratorFailure {
    #[error("{operation} failed: {source}")]
    Store {
        operation: &'static str,
        #[source]
        source: StoreError,
    },

    #[error("{operation} did not finish within the {budget:?} request deadline")]
    DeadlineElapsed {
        operation: &'static str,
        budget: Duration,
    },
}

/// Shared deadline for every collaborator read made while serving one request.
#[derive(Debug, Clone, Copy)]
pub struct RequestDeadline {
    at: Instant,
    budget: Duration,
}

impl RequestDeadline {
    pub fn start(budget: Duration) -> Self {
        Self {
            at: Instant::now() + budget,
            budget,
        }
    }

    pub async fn read<T, F>(&self, operation: &'static str, read: F) -> Result<T, CollaboratorFailure>
    where
        F: Future<Output = Result<T, StoreError>>,
    {
        match timeout_at(self.at, read).await {
            Ok(result) => result.map_err(|source| CollaboratorFailure::Store { operation, source }),
            Err(_) => Err(CollaboratorFailure::DeadlineElapsed {
                operation,
                budget: self.budget,
            }),
        }
    }
}
