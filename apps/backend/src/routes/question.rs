//! Question endpoint

use axum::{extract::rejection::JsonRejection, Json};

use crate::error::Result;
use crate::models::{Question, QuestionRequest};

/// POST /api/question
pub async fn generate(
    payload: std::result::Result<Json<QuestionRequest>, JsonRejection>,
) -> Result<Json<Question>> {
    let Json(payload) = payload?;
    let question = zetamac_core::generate_with_ranges(
        &payload.difficulty,
        &payload.ops,
        payload.ranges.as_ref(),
    )?;

    tracing::debug!(
        difficulty = %payload.difficulty,
        ops = %payload.ops,
        question_id = %question.id,
        "Generated question"
    );

    Ok(Json(question))
}
