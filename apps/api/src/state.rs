use std::sync::Arc;

use axum::extract::FromRef;

use crate::auth::AuthConfig;
use crate::config::Config;
use crate::recommendation::engine::{EngineSettings, RecommendationEngine};
use crate::recommendation::observer::{RecommendationObserver, TracingObserver};
use crate::recommendation::similar_jobs::{FinderSettings, SimilarJobsFinder};
use crate::recommendation::weights::{MatchWeights, SimilarityWeights};
use crate::store::RecommendationStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Read-only collaborators. Postgres in production, in-memory in tests.
    pub store: Arc<dyn RecommendationStore>,
    pub engine: Arc<RecommendationEngine>,
    pub similar_jobs: Arc<SimilarJobsFinder>,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn RecommendationStore>) -> Self {
        let observer: Arc<dyn RecommendationObserver> = Arc::new(TracingObserver);

        let engine = RecommendationEngine::new(
            store.clone(),
            EngineSettings {
                weights: MatchWeights::default(),
                candidate_cap: config.recommendation_candidate_cap,
                read_deadline: config.recommendation_timeout,
            },
        )
        .with_observer(observer.clone());

        let similar_jobs = SimilarJobsFinder::new(
            store.clone(),
            FinderSettings {
                weights: SimilarityWeights::default(),
                read_deadline: config.recommendation_timeout,
            },
        )
        .with_observer(observer);

        Self {
            config,
            store,
            engine: Arc::new(engine),
            similar_jobs: Arc::new(similar_jobs),
        }
    }
}

impl FromRef<AppState> for AuthConfig {
    fn from_ref(state: &AppState) -> Self {
        AuthConfig {
            jwt_secret: state.config.jwt_secret.clone(),
        }
    }
}
