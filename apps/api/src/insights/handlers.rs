use axum::{extract::State, Json};
use serde::Serialize;

use crate::auth::CandidateUser;
use crate::errors::AppError;
use crate::insights::completeness::{compute_profile_insights, ProfileInsights};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct InsightsResponse {
    pub success: bool,
    pub data: Option<ProfileInsights>,
}

/// GET /api/profile/insights
///
/// `data` is null until the candidate creates a profile. Unlike the
/// recommendation routes, a failed profile read surfaces as a 500.
pub async fn handle_profile_insights(
    State(state): State<AppState>,
    CandidateUser(user): CandidateUser,
) -> Result<Json<InsightsResponse>, AppError> {
    let profile = state.store.get_profile(user.id).await?;
    let data = profile.map(|profile| compute_profile_insights(&profile, true));
    Ok(Json(InsightsResponse {
        success: true,
        data,
    }))
}
