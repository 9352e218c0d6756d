use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::judge::EventJudgeEntry;
use crate::error::{Result, StorageError};
use crate::models::Judge;

const JUDGE_COLUMNS: &str = "judge_id, user_id, role, is_active, created_at";

/// Repository for Judge database operations
pub struct JudgeRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> JudgeRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Assign a user as judge for an event. Idempotent upsert-by-user:
    /// the judge row is created once per user, and the event scope entry
    /// uses an atomic append-if-absent, so assigning twice leaves
    /// exactly one judge row scoped to the event exactly once.
    pub async fn assign(&self, event_id: Uuid, user_id: Uuid) -> Result<Judge> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM events WHERE event_id = $1)")
                .bind(event_id)
                .fetch_one(self.pool)
                .await?;
        if !exists {
            return Err(StorageError::NotFound);
        }

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO judges (user_id)
            VALUES ($1)
            ON CONFLICT (user_id) DO NOTHING
            "#,
        )
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

        let judge = sqlx::query_as::<_, Judge>(&format!(
            "SELECT {JUDGE_COLUMNS} FROM judges WHERE user_id = $1"
        ))
        .bind(user_id)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO judge_events (judge_id, event_id)
            VALUES ($1, $2)
            ON CONFLICT (judge_id, event_id) DO NOTHING
            "#,
        )
        .bind(judge.judge_id)
        .bind(event_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(judge)
    }

    /// Event IDs in a judge's scope.
    pub async fn events_for(&self, judge_id: Uuid) -> Result<Vec<Uuid>> {
        let events = sqlx::query_scalar::<_, Uuid>(
            "SELECT event_id FROM judge_events WHERE judge_id = $1 ORDER BY assigned_at",
        )
        .bind(judge_id)
        .fetch_all(self.pool)
        .await?;

        Ok(events)
    }

    /// The authorization gate for score submission and score viewing:
    /// the caller must be an active judge scoped to the event.
    pub async fn find_active_for_event(&self, user_id: Uuid, event_id: Uuid) -> Result<Judge> {
        let judge = sqlx::query_as::<_, Judge>(
            r#"
            SELECT j.judge_id, j.user_id, j.role, j.is_active, j.created_at
            FROM judges j
            INNER JOIN judge_events je ON je.judge_id = j.judge_id
            WHERE j.user_id = $1 AND je.event_id = $2 AND j.is_active
            "#,
        )
        .bind(user_id)
        .bind(event_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| {
            StorageError::Forbidden("You are not assigned as a judge for this event".to_string())
        })?;

        Ok(judge)
    }

    /// List judges assigned to an event with joined user info, newest first.
    pub async fn list_for_event(&self, event_id: Uuid) -> Result<Vec<EventJudgeEntry>> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM events WHERE event_id = $1)")
                .bind(event_id)
                .fetch_one(self.pool)
                .await?;
        if !exists {
            return Err(StorageError::NotFound);
        }

        #[derive(sqlx::FromRow)]
        struct Row {
            judge_id: Uuid,
            user_id: Uuid,
            full_name: String,
            email: String,
            role: String,
            is_active: bool,
            assigned_at: chrono::NaiveDateTime,
        }

        let rows = sqlx::query_as::<_, Row>(
            r#"
            SELECT j.judge_id, j.user_id, u.full_name, u.email, j.role, j.is_active,
                   je.assigned_at
            FROM judges j
            INNER JOIN judge_events je ON je.judge_id = j.judge_id
            INNER JOIN users u ON u.user_id = j.user_id
            WHERE je.event_id = $1
            ORDER BY je.assigned_at DESC
            "#,
        )
        .bind(event_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| EventJudgeEntry {
                judge_id: row.judge_id,
                user_id: row.user_id,
                full_name: row.full_name,
                email: row.email,
                role: row.role,
                is_active: row.is_active,
                assigned_at: row.assigned_at,
            })
            .collect())
    }
}
