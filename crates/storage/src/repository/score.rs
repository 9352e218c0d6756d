use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::Score;
use crate::models::event::status;
use crate::services::scoring::{Criteria, weighted_total};

const SCORE_COLUMNS: &str = "score_id, event_id, registration_id, judge_id, \
     innovation, technical, presentation, design, total, feedback, locked, \
     created_at, updated_at";

/// Repository for Score database operations
pub struct ScoreRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ScoreRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Submit a judge's score for a registration. Upserts on the
    /// (registration, judge) key: a first submission creates the row,
    /// a re-submission overwrites it, and a locked row is never
    /// touched. The transaction takes `FOR SHARE` on the event row so
    /// the write cannot interleave with a concurrent finalization,
    /// which locks the event row `FOR UPDATE`.
    pub async fn submit(
        &self,
        registration_id: Uuid,
        judge_user_id: Uuid,
        criteria: &Criteria,
        feedback: Option<&str>,
    ) -> Result<Score> {
        let mut tx = self.pool.begin().await?;

        #[derive(sqlx::FromRow)]
        struct RegistrationRow {
            event_id: Uuid,
            event_status: String,
        }

        let registration = sqlx::query_as::<_, RegistrationRow>(
            r#"
            SELECT r.event_id, e.status AS event_status
            FROM event_registrations r
            INNER JOIN events e ON e.event_id = r.event_id
            WHERE r.registration_id = $1
            FOR SHARE OF e
            "#,
        )
        .bind(registration_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(StorageError::NotFound)?;

        if registration.event_status == status::COMPLETED {
            return Err(StorageError::Forbidden("Scores locked".to_string()));
        }

        let judge_id: Uuid = sqlx::query_scalar(
            r#"
            SELECT j.judge_id
            FROM judges j
            INNER JOIN judge_events je ON je.judge_id = j.judge_id
            WHERE j.user_id = $1 AND je.event_id = $2 AND j.is_active
            "#,
        )
        .bind(judge_user_id)
        .bind(registration.event_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| StorageError::Forbidden("You are not assigned as judge".to_string()))?;

        let total = weighted_total(criteria);

        // The WHERE on the conflict arm is the atomic backstop: a row
        // locked between our status check and this statement is left
        // untouched and nothing is returned.
        let score = sqlx::query_as::<_, Score>(&format!(
            r#"
            INSERT INTO scores (event_id, registration_id, judge_id,
                                innovation, technical, presentation, design,
                                total, feedback)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (registration_id, judge_id)
            DO UPDATE SET
                innovation = EXCLUDED.innovation,
                technical = EXCLUDED.technical,
                presentation = EXCLUDED.presentation,
                design = EXCLUDED.design,
                total = EXCLUDED.total,
                feedback = EXCLUDED.feedback,
                updated_at = CURRENT_TIMESTAMP
            WHERE NOT scores.locked
            RETURNING {SCORE_COLUMNS}
            "#
        ))
        .bind(registration.event_id)
        .bind(registration_id)
        .bind(judge_id)
        .bind(criteria.innovation)
        .bind(criteria.technical)
        .bind(criteria.presentation)
        .bind(criteria.design)
        .bind(total)
        .bind(feedback)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| StorageError::Forbidden("Scores locked".to_string()))?;

        tx.commit().await?;

        Ok(score)
    }

    /// Scores a judge submitted for one event.
    pub async fn list_for_judge(&self, event_id: Uuid, judge_id: Uuid) -> Result<Vec<Score>> {
        let scores = sqlx::query_as::<_, Score>(&format!(
            r#"
            SELECT {SCORE_COLUMNS}
            FROM scores
            WHERE event_id = $1 AND judge_id = $2
            ORDER BY updated_at DESC
            "#
        ))
        .bind(event_id)
        .bind(judge_id)
        .fetch_all(self.pool)
        .await?;

        Ok(scores)
    }
}
