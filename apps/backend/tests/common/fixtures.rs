//! Test fixtures and factory functions for creating test data.

use serde_json::json;

use zetamac_backend::models::NewRun;

/// Build a run outcome with plausible attempted/correct counts.
pub fn new_run(mode: &str, difficulty: &str, ops: &str, score: i64) -> NewRun {
    NewRun {
        mode: mode.to_string(),
        difficulty: difficulty.to_string(),
        ops: ops.to_string(),
        score,
        attempted: score + 3,
        correct: score,
    }
}

/// Create a question request body.
pub fn question_request(difficulty: &str, ops: &str) -> serde_json::Value {
    json!({ "difficulty": difficulty, "ops": ops })
}

/// Create a question request body with custom operand ranges.
pub fn question_request_with_ranges(
    difficulty: &str,
    ops: &str,
    add: ((i64, i64), (i64, i64)),
    mult: ((i64, i64), (i64, i64)),
) -> serde_json::Value {
    let range = |(min, max): (i64, i64)| json!({ "min": min, "max": max });
    json!({
        "difficulty": difficulty,
        "ops": ops,
        "ranges": {
            "add": { "a": range(add.0), "b": range(add.1) },
            "mult": { "a": range(mult.0), "b": range(mult.1) },
        }
    })
}

/// Create a run submission body.
pub fn create_run_request(mode: &str, difficulty: &str, ops: &str, score: i64) -> serde_json::Value {
    json!({
        "mode": mode,
        "difficulty": difficulty,
        "ops": ops,
        "score": score,
        "attempted": score + 3,
        "correct": score
    })
}
