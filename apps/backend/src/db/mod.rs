//! SQLite database operations

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::error::{ApiError, Result};
use crate::models::*;

/// Conditional upsert: only a strictly greater score replaces the stored best.
const UPSERT_HIGH_SCORE: &str = r#"
    INSERT INTO high_scores (mode, difficulty, ops, best_score, best_run_id)
    VALUES (?1, ?2, ?3, ?4, ?5)
    ON CONFLICT (mode, difficulty, ops) DO UPDATE SET
        best_score = excluded.best_score,
        best_run_id = excluded.best_run_id
    WHERE excluded.best_score > high_scores.best_score
"#;

/// Database wrapper with connection pool
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (or create) the SQLite database at `database_url`
    pub async fn connect(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Private in-memory database.
    ///
    /// Each SQLite connection to `:memory:` is its own database, so the pool
    /// holds exactly one connection that never expires.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Run database migrations
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| ApiError::Migration(e.to_string()))?;
        Ok(())
    }

    // === Run Repository ===

    /// Insert a run and update the high score for its key if it beats it.
    ///
    /// Both writes share one transaction. The run insert takes the write
    /// lock first, so concurrent submissions for the same key serialize and
    /// the stored best is always the maximum submitted score.
    pub async fn record_run(&self, run: &NewRun) -> Result<RunRecorded> {
        let mut tx = self.pool.begin().await?;

        let run_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO runs (mode, difficulty, ops, score, attempted, correct)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            RETURNING id
            "#,
        )
        .bind(&run.mode)
        .bind(&run.difficulty)
        .bind(&run.ops)
        .bind(run.score)
        .bind(run.attempted)
        .bind(run.correct)
        .fetch_one(&mut *tx)
        .await?;

        let updated = sqlx::query(UPSERT_HIGH_SCORE)
            .bind(&run.mode)
            .bind(&run.difficulty)
            .bind(&run.ops)
            .bind(run.score)
            .bind(run_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let recorded = if updated > 0 {
            RunRecorded {
                run_id,
                is_new_high_score: true,
                best_score: run.score,
            }
        } else {
            let best_score: i64 = sqlx::query_scalar(
                r#"
                SELECT best_score FROM high_scores
                WHERE mode = ?1 AND difficulty = ?2 AND ops = ?3
                "#,
            )
            .bind(&run.mode)
            .bind(&run.difficulty)
            .bind(&run.ops)
            .fetch_one(&mut *tx)
            .await?;

            RunRecorded {
                run_id,
                is_new_high_score: false,
                best_score,
            }
        };

        tx.commit().await?;

        Ok(recorded)
    }

    /// Get run by ID
    pub async fn get_run(&self, run_id: i64) -> Result<Option<Run>> {
        let run = sqlx::query_as::<_, Run>(
            r#"
            SELECT id, created_at, mode, difficulty, ops, score, attempted, correct
            FROM runs
            WHERE id = ?1
            "#,
        )
        .bind(run_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(run)
    }

    /// List runs, most recent first, with optional key filters.
    ///
    /// Empty filter strings match everything. The limit is clamped.
    pub async fn list_runs(&self, filter: &RunFilter) -> Result<Vec<Run>> {
        fn non_empty(value: &Option<String>) -> Option<&str> {
            value.as_deref().filter(|v| !v.is_empty())
        }

        let runs = sqlx::query_as::<_, Run>(
            r#"
            SELECT id, created_at, mode, difficulty, ops, score, attempted, correct
            FROM runs
            WHERE (?1 IS NULL OR mode = ?1)
              AND (?2 IS NULL OR difficulty = ?2)
              AND (?3 IS NULL OR ops = ?3)
            ORDER BY created_at DESC, id DESC
            LIMIT ?4
            "#,
        )
        .bind(non_empty(&filter.mode))
        .bind(non_empty(&filter.difficulty))
        .bind(non_empty(&filter.ops))
        .bind(clamp_limit(filter.limit))
        .fetch_all(&self.pool)
        .await?;

        Ok(runs)
    }

    // === High Score Repository ===

    /// Get the high score row for a key, if any
    pub async fn find_high_score(
        &self,
        mode: &str,
        difficulty: &str,
        ops: &str,
    ) -> Result<Option<HighScore>> {
        let high_score = sqlx::query_as::<_, HighScore>(
            r#"
            SELECT id, mode, difficulty, ops, best_score, best_run_id
            FROM high_scores
            WHERE mode = ?1 AND difficulty = ?2 AND ops = ?3
            "#,
        )
        .bind(mode)
        .bind(difficulty)
        .bind(ops)
        .fetch_optional(&self.pool)
        .await?;

        Ok(high_score)
    }

    /// Best score for a key; `{0, None}` when nothing was recorded yet
    pub async fn get_high_score(
        &self,
        mode: &str,
        difficulty: &str,
        ops: &str,
    ) -> Result<HighScoreResponse> {
        Ok(self.find_high_score(mode, difficulty, ops).await?.into())
    }
}
