//! Read-only collaborators the recommendation pipeline depends on.
//!
//! `AppState` carries an `Arc<dyn RecommendationStore>`; production wires in
//! `PgStore`, tests use the in-memory store.

#[cfg(test)]
pub mod memory;
pub mod postgres;

use std::collections::HashSet;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::job::JobPosting;
use crate::models::profile::CandidateProfile;
use crate::models::UnknownVariant;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("stored record could not be decoded: {0}")]
    Decode(#[from] UnknownVariant),

    #[allow(dead_code)]
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait RecommendationStore: Send + Sync {
    async fn get_profile(&self, candidate_id: Uuid) -> Result<Option<CandidateProfile>, StoreError>;

    /// Ids of every job the candidate has applied to.
    async fn get_application_job_ids(&self, candidate_id: Uuid) -> Result<HashSet<Uuid>, StoreError>;

    /// Up to `cap` active jobs whose id is not in `exclude_ids`.
    async fn query_active_jobs(
        &self,
        exclude_ids: &HashSet<Uuid>,
        cap: usize,
    ) -> Result<Vec<JobPosting>, StoreError>;

    async fn get_job(&self, job_id: Uuid) -> Result<Option<JobPosting>, StoreError>;

    /// Up to `cap` active jobs other than `exclude_id` sharing a skill, the
    /// job type, or the exact location with `target`.
    async fn query_related_jobs(
        &self,
        target: &JobPosting,
        exclude_id: Uuid,
        cap: usize,
    ) -> Result<Vec<JobPosting>, StoreError>;
}
