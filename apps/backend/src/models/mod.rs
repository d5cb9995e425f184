//! Database models and API types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Re-export shared types from zetamac-core
pub use zetamac_core::{CustomRanges, Difficulty, NumberRange, OperandRanges, Question};

/// Default number of runs returned by a listing.
pub const DEFAULT_RUN_LIMIT: i64 = 200;
/// Upper bound on runs returned by a listing.
pub const MAX_RUN_LIMIT: i64 = 500;

// === Database Entity Types ===

/// Completed practice run stored in SQLite
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Run {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub mode: String,
    pub difficulty: String,
    pub ops: String,
    pub score: i64,
    pub attempted: i64,
    pub correct: i64,
}

/// Best score for one (mode, difficulty, ops) key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct HighScore {
    pub id: i64,
    pub mode: String,
    pub difficulty: String,
    pub ops: String,
    pub best_score: i64,
    pub best_run_id: i64,
}

/// Run outcome reported by a client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRun {
    pub mode: String,
    pub difficulty: String,
    pub ops: String,
    pub score: i64,
    pub attempted: i64,
    pub correct: i64,
}

/// Result of recording a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRecorded {
    pub run_id: i64,
    pub is_new_high_score: bool,
    pub best_score: i64,
}

/// Filters for listing runs. `None` or empty matches everything.
#[derive(Debug, Clone, Default)]
pub struct RunFilter {
    pub mode: Option<String>,
    pub difficulty: Option<String>,
    pub ops: Option<String>,
    pub limit: Option<i64>,
}

/// Clamp a requested listing limit into `[1, MAX_RUN_LIMIT]`.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_RUN_LIMIT).clamp(1, MAX_RUN_LIMIT)
}

// === API Request/Response Types ===

/// POST /api/question request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRequest {
    pub difficulty: String,
    pub ops: String,
    #[serde(default)]
    pub ranges: Option<CustomRanges>,
}

/// GET /api/highscore query
#[derive(Debug, Clone, Deserialize)]
pub struct HighScoreQuery {
    pub mode: String,
    pub difficulty: String,
    pub ops: String,
}

/// GET /api/highscore response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreResponse {
    pub best_score: i64,
    pub best_run_id: Option<i64>,
}

impl From<Option<HighScore>> for HighScoreResponse {
    fn from(row: Option<HighScore>) -> Self {
        match row {
            Some(h) => Self {
                best_score: h.best_score,
                best_run_id: Some(h.best_run_id),
            },
            None => Self {
                best_score: 0,
                best_run_id: None,
            },
        }
    }
}

/// GET /api/runs query
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RunListQuery {
    pub mode: Option<String>,
    pub difficulty: Option<String>,
    pub ops: Option<String>,
    pub limit: Option<i64>,
}

impl From<RunListQuery> for RunFilter {
    fn from(q: RunListQuery) -> Self {
        Self {
            mode: q.mode,
            difficulty: q.difficulty,
            ops: q.ops,
            limit: q.limit,
        }
    }
}

/// GET /api/runs response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunListResponse {
    pub runs: Vec<Run>,
}
