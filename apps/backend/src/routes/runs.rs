//! Run endpoints

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// POST /api/runs
pub async fn create(
    State(state): State<AppState>,
    payload: std::result::Result<Json<NewRun>, JsonRejection>,
) -> Result<Json<RunRecorded>> {
    let Json(payload) = payload?;
    let recorded = state.db.record_run(&payload).await?;

    if recorded.is_new_high_score {
        tracing::info!(
            run_id = recorded.run_id,
            mode = %payload.mode,
            difficulty = %payload.difficulty,
            ops = %payload.ops,
            score = payload.score,
            "New high score"
        );
    } else {
        tracing::info!(run_id = recorded.run_id, score = payload.score, "Recorded run");
    }

    Ok(Json(recorded))
}

/// GET /api/runs
pub async fn list(
    State(state): State<AppState>,
    query: std::result::Result<Query<RunListQuery>, QueryRejection>,
) -> Result<Json<RunListResponse>> {
    let Query(query) = query?;
    let runs = state.db.list_runs(&query.into()).await?;
    Ok(Json(RunListResponse { runs }))
}
