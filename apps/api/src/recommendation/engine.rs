//! Recommendation Engine: ranks active jobs for one candidate.
//!
//! Pipeline: profile → application history → capped active-job query →
//! score + explain each job → rank → truncate.
//!
//! Only the newest `candidate_cap` eligible jobs are scored. On large catalogs
//! a strong match outside that window is never considered; this bounds the
//! work per request and is a known scaling limit.
//!
//! Never fails: a missing profile yields an empty list, and any collaborator
//! failure or deadline overrun is reported to the observer and also yields
//! an empty list.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use uuid::Uuid;

use crate::models::job::JobPosting;
use crate::models::profile::CandidateProfile;
use crate::recommendation::collaborator::{CollaboratorFailure, RequestDeadline};
use crate::recommendation::match_scoring::score_breakdown;
use crate::recommendation::observer::{NoopObserver, RecommendationObserver};
use crate::recommendation::ranking::rank_order;
use crate::recommendation::reasons::match_reasons;
use crate::recommendation::weights::MatchWeights;
use crate::store::RecommendationStore;

pub const DEFAULT_CANDIDATE_CAP: usize = 50;
pub const DEFAULT_READ_DEADLINE: Duration = Duration::from_secs(2);

/// A job snapshot annotated with its score and explanation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    #[serde(flatten)]
    pub job: JobPosting,
    pub match_score: u8,
    pub match_reasons: Vec<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct EngineSettings {
    pub weights: MatchWeights,
    pub candidate_cap: usize,
    pub read_deadline: Duration,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            weights: MatchWeights::default(),
            candidate_cap: DEFAULT_CANDIDATE_CAP,
            read_deadline: DEFAULT_READ_DEADLINE,
        }
    }
}

pub struct RecommendationEngine {
    store: Arc<dyn RecommendationStore>,
    settings: EngineSettings,
    observer: Arc<dyn RecommendationObserver>,
}

impl RecommendationEngine {
    pub fn new(store: Arc<dyn RecommendationStore>, settings: EngineSettings) -> Self {
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

    /// Top `limit` matches for the candidate, best first.
    pub async fn recommend(&self, candidate_id: Uuid, limit: usize) -> Vec<MatchResult> {
        match self.try_recommend(candidate_id, limit).await {
            Ok(results) => results,
            Err(failure) => {
                self.observer.collaborator_failed(&failure);
                Vec::new()
            }
        }
    }

    async fn try_recommend(
        &self,
        candidate_id: Uuid,
        limit: usize,
    ) -> Result<Vec<MatchResult>, CollaboratorFailure> {
        let deadline = RequestDeadline::start(self.settings.read_deadline);

        let Some(profile) = deadline
            .read("get_profile", self.store.get_profile(candidate_id))
            .await?
        else {
            self.observer.profile_missing(candidate_id);
            return Ok(Vec::new());
        };

        let applied = deadline
            .read(
                "get_application_job_ids",
                self.store.get_application_job_ids(candidate_id),
            )
            .await?;

        let jobs = deadline
            .read(
                "query_active_jobs",
                self.store
                    .query_active_jobs(&applied, self.settings.candidate_cap),
            )
            .await?;

        // The store contract already filters these; re-checked so a stale or
        // misbehaving store cannot leak applied or closed jobs.
        let mut results: Vec<MatchResult> = jobs
            .into_iter()
            .filter(|job| job.is_active() && !applied.contains(&job.id))
            .take(self.settings.candidate_cap)
            .map(|job| self.evaluate(&profile, job))
            .collect();

        self.observer
            .candidates_loaded(candidate_id, applied.len(), results.len());

        results.sort_by(|a, b| rank_order(a.match_score, &a.job, b.match_score, &b.job));
        results.truncate(limit);

        self.observer.recommendations_ranked(candidate_id, &results);
        Ok(results)
    }

    fn evaluate(&self, profile: &CandidateProfile, job: JobPosting) -> MatchResult {
        let breakdown = score_breakdown(profile, &job, &self.settings.weights);
        let match_reasons = match_reasons(profile, &job, &breakdown);
        MatchResult {
            match_score: breakdown.total(),
            match_reasons,
            job,
        }
    }
}
