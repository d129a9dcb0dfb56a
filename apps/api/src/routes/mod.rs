pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::insights::handlers as insights;
use crate::recommendation::handlers as recommendations;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Recommendations API
        .route(
            "/api/recommendations/jobs",
            get(recommendations::handle_job_recommendations),
        )
        .route(
            "/api/recommendations/similar/:job_id",
            get(recommendations::handle_similar_jobs),
        )
        .route(
            "/api/recommendations/refresh",
            post(recommendations::handle_refresh),
        )
        // Profile insights
        .route(
            "/api/profile/insights",
            get(insights::handle_profile_insights),
        )
        .with_state(state)
}
