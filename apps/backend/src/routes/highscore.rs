//! High score endpoint

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};

use crate::error::Result;
use crate::models::{HighScoreQuery, HighScoreResponse};
use crate::AppState;

/// GET /api/highscore
pub async fn get(
    State(state): State<AppState>,
    query: std::result::Result<Query<HighScoreQuery>, QueryRejection>,
) -> Result<Json<HighScoreResponse>> {
    let Query(query) = query?;
    let high_score = state
        .db
        .get_high_score(&query.mode, &query.difficulty, &query.ops)
        .await?;
    Ok(Json(high_score))
}
