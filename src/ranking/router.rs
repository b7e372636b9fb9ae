use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::Serialize;
use serde_json::json;

use super::{rank_batch, ClusterBatch};
use crate::scoring::{
    ClusterSignals, CompetitiveLandscape, DataQualityLevel, PriorityScore, PriorityScorer,
    ScoringError,
};

/// Router builder exposing single-cluster scoring and batch ranking.
pub fn ranking_router(scorer: Arc<PriorityScorer>) -> Router {
    Router::new()
        .route("/api/v1/clusters/score", post(score_handler))
        .route("/api/v1/clusters/rank", post(rank_handler))
        .with_state(scorer)
}

#[derive(Debug, Serialize)]
pub(crate) struct ScoreView {
    pub(crate) priority_score: PriorityScore,
    pub(crate) landscape: CompetitiveLandscape,
    pub(crate) data_quality: DataQualityLevel,
}

pub(crate) async fn score_handler(
    State(scorer): State<Arc<PriorityScorer>>,
    axum::Json(signals): axum::Json<ClusterSignals>,
) -> Response {
    match scorer.score_cluster(&signals) {
        Ok(priority_score) => {
            let view = ScoreView {
                priority_score,
                landscape: priority_score.landscape(),
                data_quality: DataQualityLevel::from_total_size(signals.total_data_size),
            };
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(error) => invalid_input(error),
    }
}

pub(crate) async fn rank_handler(
    State(scorer): State<Arc<PriorityScorer>>,
    axum::Json(batch): axum::Json<ClusterBatch>,
) -> Response {
    match rank_batch(&scorer, &batch) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => invalid_input(error),
    }
}

fn invalid_input(error: ScoringError) -> Response {
    let ScoringError::InvalidInput { field, .. } = &error;
    let payload = json!({
        "error": error.to_string(),
        "field": field,
    });
    (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
}
