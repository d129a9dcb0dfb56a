//! In-memory collaborator for tests. Honors the same read contracts as
//! `PgStore`, and can be told to fail, stall, or ignore its filters.

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::application::ApplicationRecord;
use crate::models::job::JobPosting;
use crate::models::profile::CandidateProfile;
use crate::store::{RecommendationStore, StoreError};

#[derive(Default)]
pub struct InMemoryStore {
    profiles: Vec<CandidateProfile>,
    applications: Vec<ApplicationRecord>,
    jobs: Vec<JobPosting>,
    failing: bool,
    read_delay: Option<Duration>,
    unfiltered: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(mut self, profile: CandidateProfile) -> Self {
        self.profiles.push(profile);
        self
    }

    pub fn with_application(mut self, student_id: Uuid, job_id: Uuid) -> Self {
        self.applications.push(ApplicationRecord { job_id, student_id });
        self
    }

    pub fn with_job(mut self, job: JobPosting) -> Self {
        self.jobs.push(job);
        self
    }

    pub fn with_jobs(mut self, jobs: impl IntoIterator<Item = JobPosting>) -> Self {
        self.jobs.extend(jobs);
        self
    }

    /// Every read returns `StoreError::Unavailable`.
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    /// Every read sleeps for `delay` before answering.
    pub fn with_read_delay(mut self, delay: Duration) -> Self {
        self.read_delay = Some(delay);
        self
    }

    /// Job queries return every stored job, ignoring status, exclusions, and cap.
    pub fn unfiltered(mut self) -> Self {
        self.unfiltered = true;
        self
    }

    async fn before_read(&self) -> Result<(), StoreError> {
        if let Some(delay) = self.read_delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing {
            return Err(StoreError::Unavailable("in-memory store set to fail".to_string()));
        }
        Ok(())
    }

    fn newest_first(mut jobs: Vec<JobPosting>) -> Vec<JobPosting> {
        jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        jobs
    }
}

#[async_trait]
impl RecommendationStore for InMemoryStore {
    async fn get_profile(&self, candidate_id: Uuid) -> Result<Option<CandidateProfile>, StoreError> {
        self.before_read().await?;
        Ok(self
            .profiles
            .iter()
            .find(|p| p.user_id == candidate_id)
            .cloned())
    }

    async fn get_application_job_ids(&self, candidate_id: Uuid) -> Result<HashSet<Uuid>, StoreError> {
        self.before_read().await?;
        Ok(self
            .applications
            .iter()
            .filter(|a| a.student_id == candidate_id)
            .map(|a| a.job_id)
            .collect())
    }

    async fn query_active_jobs(
        &self,
        exclude_ids: &HashSet<Uuid>,
        cap: usize,
    ) -> Result<Vec<JobPosting>, StoreError> {
        self.before_read().await?;
        if self.unfiltered {
            return Ok(self.jobs.clone());
        }
        let eligible = self
            .jobs
            .iter()
            .filter(|j| j.is_active() && !exclude_ids.contains(&j.id))
            .cloned()
            .collect();
        Ok(Self::newest_first(eligible).into_iter().take(cap).collect())
    }

    async fn get_job(&self, job_id: Uuid) -> Result<Option<JobPosting>, StoreError> {
        self.before_read().await?;
        Ok(self.jobs.iter().find(|j| j.id == job_id).cloned())
    }

    async fn query_related_jobs(
        &self,
        target: &JobPosting,
        exclude_id: Uuid,
        cap: usize,
    ) -> Result<Vec<JobPosting>, StoreError> {
        self.before_read().await?;
        if self.unfiltered {
            return Ok(self.jobs.clone());
        }
        let related = self
            .jobs
            .iter()
            .filter(|j| j.is_active() && j.id != exclude_id)
            .filter(|j| {
                j.skills.iter().any(|s| target.skills.contains(s))
                    || j.job_type == target.job_type
                    || j.location == target.location
            })
            .cloned()
            .collect();
        Ok(Self::newest_first(related).into_iter().take(cap).collect())
    }
}
