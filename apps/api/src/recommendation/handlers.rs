//! Axum route handlers for the Recommendations API.
//!
//! The engine and finder never fail, so every handler answers 200 once the
//! caller is authenticated. Auth failures are the only error responses.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::{AuthUser, CandidateUser};
use crate::recommendation::engine::MatchResult;
use crate::recommendation::limits::{clamp_limit, RECOMMENDATION_LIMIT, SIMILAR_JOBS_LIMIT};
use crate::recommendation::similar_jobs::SimilarityResult;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// `limit` stays raw text so malformed values can be clamped instead of rejected.
#[derive(Debug, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    pub count: usize,
    pub data: Vec<T>,
}

impl<T> ListResponse<T> {
    fn ok(data: Vec<T>) -> Self {
        Self {
            success: true,
            message: None,
            count: data.len(),
            data,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/recommendations/jobs?limit=N
///
/// Personalized recommendations for the signed-in candidate.
pub async fn handle_job_recommendations(
    State(state): State<AppState>,
    CandidateUser(user): CandidateUser,
    Query(query): Query<LimitQuery>,
) -> Json<ListResponse<MatchResult>> {
    let limit = clamp_limit(query.limit.as_deref(), RECOMMENDATION_LIMIT);
    let recommendations = state.engine.recommend(user.id, limit).await;
    Json(ListResponse::ok(recommendations))
}

/// GET /api/recommendations/similar/:job_id?limit=N
///
/// An id that is not a UUID cannot name a stored job, so it gets the same
/// empty answer as an unknown one.
pub async fn handle_similar_jobs(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(job_id): Path<String>,
    Query(query): Query<LimitQuery>,
) -> Json<ListResponse<SimilarityResult>> {
    let limit = clamp_limit(query.limit.as_deref(), SIMILAR_JOBS_LIMIT);
    let similar = match Uuid::parse_str(&job_id) {
        Ok(job_id) => state.similar_jobs.similar_to(job_id, limit).await,
        Err(_) => {
            tracing::debug!("Similar jobs requested for malformed job id '{job_id}'");
            Vec::new()
        }
    };
    Json(ListResponse::ok(similar))
}

/// POST /api/recommendations/refresh
///
/// Nothing is cached server-side, so this recomputes exactly like the jobs endpoint.
pub async fn handle_refresh(
    State(state): State<AppState>,
    CandidateUser(user): CandidateUser,
    Query(query): Query<LimitQuery>,
) -> Json<ListResponse<MatchResult>> {
    let limit = clamp_limit(query.limit.as_deref(), RECOMMENDATION_LIMIT);
    let recommendations = state.engine.recommend(user.id, limit).await;
    Json(ListResponse {
        message: Some("Recommendations refreshed"),
        ..ListResponse::ok(recommendations)
    })
}
