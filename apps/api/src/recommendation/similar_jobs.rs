//! Similar Jobs: "you might also like" for a single posting.
//!
//! Loads the target, asks the store for up to `2 × limit` loosely related
//! active postings, scores each against the target, ranks, truncates.
//! A missing target or any failed read yields an empty list.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use uuid::Uuid;

use crate::models::job::JobPosting;
use crate::recommendation::collaborator::{CollaboratorFailure, RequestDeadline};
use crate::recommendation::engine::DEFAULT_READ_DEADLINE;
use crate::recommendation::observer::{NoopObserver, RecommendationObserver};
use crate::recommendation::ranking::rank_order;
use crate::recommendation::similarity::similarity_score;
use crate::recommendation::weights::SimilarityWeights;
use crate::store::RecommendationStore;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityResult {
    #[serde(flatten)]
    pub job: JobPosting,
    pub similarity_score: u8,
}

#[derive(Debug, Clone, Copy)]
pub struct FinderSettings {
    pub weights: SimilarityWeights,
    pub read_deadline: Duration,
}

impl Default for FinderSettings {
    fn default() -> Self {
        Self {
            weights: SimilarityWeights::default(),
            read_deadline: DEFAULT_READ_DEADLINE,
        }
    }
}

pub struct SimilarJobsFinder {
    store: Arc<dyn RecommendationStore>,
    settings: FinderSettings,
    observer: Arc<dyn RecommendationObserver>,
}

impl SimilarJobsFinder {
    pub fn new(store: Arc<dyn RecommendationStore>, settings: FinderSettings) -> Self {
        Self {
            store,
            settings,
            observer: Arc::new(NoopObserver),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn RecommendationObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub async fn similar_to(&self, job_id: Uuid, limit: usize) -> Vec<SimilarityResult> {
        match self.try_similar_to(job_id, limit).await {
            Ok(results) => results,
            Err(failure) => {
                self.observer.collaborator_failed(&failure);
                Vec::new()
            }
        }
    }

    async fn try_similar_to(
        &self,
        job_id: Uuid,
        limit: usize,
    ) -> Result<Vec<SimilarityResult>, CollaboratorFailure> {
        let deadline = RequestDeadline::start(self.settings.read_deadline);

        let Some(target) = deadline.read("get_job", self.store.get_job(job_id)).await? else {
            self.observer.similar_target_missing(job_id);
            return Ok(Vec::new());
        };

        let related = deadline
            .read(
                "query_related_jobs",
                self.store
                    .query_related_jobs(&target, job_id, limit.saturating_mul(2)),
            )
            .await?;

        let mut results: Vec<SimilarityResult> = related
            .into_iter()
            .filter(|job| job.id != job_id && job.is_active())
            .map(|job| SimilarityResult {
                similarity_score: similarity_score(&target, &job, &self.settings.weights),
                job,
            })
            .collect();

        results.sort_by(|a, b| {
            rank_order(a.similarity_score, &a.job, b.similarity_score, &b.job)
        });
        results.truncate(limit);

        self.observer.similar_jobs_ranked(job_id, &results);
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::{JobStatus, JobType};
    use crate::recommendation::fixtures::{job, job_posted_at};
    use crate::store::memory::InMemoryStore;

    fn finder(store: InMemoryStore) -> SimilarJobsFinder {
        SimilarJobsFinder::new(Arc::new(store), FinderSettings::default())
    }

    fn posting(skills: &[&str], job_type: JobType, location: &str, minutes: i64) -> JobPosting {
        let mut posting = job_posted_at(skills, minutes);
        posting.job_type = job_type;
        posting.location = location.to_string();
        posting
    }

    #[tokio::test]
    async fn test_unknown_target_returns_empty() {
        let store = InMemoryStore::new().with_job(job(&["rust"]));
        assert!(finder(store).similar_to(Uuid::new_v4(), 5).await.is_empty());
    }

    #[tokio::test]
    async fn test_target_never_in_its_own_results() {
        let target = job(&["rust"]);
        let twin = job(&["rust"]);
        let store = InMemoryStore::new()
            .with_jobs([target.clone(), twin.clone()])
            .unfiltered();

        let results = finder(store).similar_to(target.id, 5).await;

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].job.id, twin.id);
        assert_eq!(results[0].similarity_score, 100);
    }

    #[tokio::test]
    async fn test_ranked_by_similarity_and_truncated() {
        let target = posting(&["python", "django"], JobType::FullTime, "Pune", 0);
        let close = posting(&["python", "flask"], JobType::FullTime, "Pune", 1);
        let partial = posting(&["python"], JobType::Contract, "Delhi", 2);
        let same_city = posting(&["go"], JobType::Internship, "Pune", 3);
        let unrelated = posting(&["go"], JobType::Internship, "Delhi", 4);
        let store = InMemoryStore::new().with_jobs([
            target.clone(),
            unrelated.clone(),
            partial.clone(),
            same_city.clone(),
            close.clone(),
        ]);

        let results = finder(store).similar_to(target.id, 2).await;

        let scored: Vec<(Uuid, u8)> = results
            .iter()
            .map(|r| (r.job.id, r.similarity_score))
            .collect();
        assert_eq!(scored, vec![(close.id, 75), (same_city.id, 25)]);
    }

    #[tokio::test]
    async fn test_closed_jobs_are_dropped() {
        let target = job(&["rust"]);
        let mut closed = job(&["rust"]);
        closed.status = JobStatus::Closed;
        let store = InMemoryStore::new()
            .with_jobs([target.clone(), closed])
            .unfiltered();

        assert!(finder(store).similar_to(target.id, 5).await.is_empty());
    }

    #[tokio::test]
    async fn test_store_failure_returns_empty() {
        let target = job(&["rust"]);
        let store = InMemoryStore::new().with_job(target.clone()).failing();
        assert!(finder(store).similar_to(target.id, 5).await.is_empty());
    }
}
