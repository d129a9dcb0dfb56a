//! Observability hook for the orchestrators. Scorers stay pure; everything
//! worth logging is reported here instead.

use tracing::{debug, warn};
use uuid::Uuid;

use crate::recommendation::collaborator::CollaboratorFailure;
use crate::recommendation::engine::MatchResult;
use crate::recommendation::similar_jobs::SimilarityResult;

/// Every method defaults to a no-op, so implementors pick the events they need.
pub trait RecommendationObserver: Send + Sync {
    fn profile_missing(&self, _candidate_id: Uuid) {}

    fn candidates_loaded(&self, _candidate_id: Uuid, _applied: usize, _candidates: usize) {}

    fn recommendations_ranked(&self, _candidate_id: Uuid, _results: &[MatchResult]) {}

    fn similar_target_missing(&self, _job_id: Uuid) {}

    fn similar_jobs_ranked(&self, _job_id: Uuid, _results: &[SimilarityResult]) {}

    fn collaborator_failed(&self, _failure: &CollaboratorFailure) {}
}

pub struct NoopObserver;

impl RecommendationObserver for NoopObserver {}

/// Forwards events to `tracing`.
pub struct TracingObserver;

impl RecommendationObserver for TracingObserver {
    fn profile_missing(&self, candidate_id: Uuid) {
        debug!("No candidate profile for {candidate_id}; returning no recommendations");
    }

    fn candidates_loaded(&self, candidate_id: Uuid, applied: usize, candidates: usize) {
        debug!(
            %candidate_id,
            applied, candidates, "Loaded candidate jobs for recommendation"
        );
    }

    fn recommendations_ranked(&self, candidate_id: Uuid, results: &[MatchResult]) {
        let top_score = results.first().map(|r| r.match_score);
        debug!(
            %candidate_id,
            returned = results.len(),
            ?top_score,
            "Ranked job recommendations"
        );
    }

    fn similar_target_missing(&self, job_id: Uuid) {
        debug!("Similar jobs requested for unknown job {job_id}");
    }

    fn similar_jobs_ranked(&self, job_id: Uuid, results: &[SimilarityResult]) {
        debug!(%job_id, returned = results.len(), "Ranked similar jobs");
    }

    fn collaborator_failed(&self, failure: &CollaboratorFailure) {
        warn!("Recommendation read degraded to empty result: {failure}");
    }
}
