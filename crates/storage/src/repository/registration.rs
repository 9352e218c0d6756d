use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::EventRegistration;
use crate::models::event::status;
use crate::services::rewards;

const REGISTRATION_COLUMNS: &str = "registration_id, event_id, user_id, form_data, \
     payment_status, attendance_marked, attendance_marked_at, attendance_marked_by, \
     reward_points, result_position, result_is_winner, result_prize, rating, feedback, \
     status, created_at";

/// Repository for EventRegistration database operations
pub struct RegistrationRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RegistrationRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<EventRegistration> {
        let registration = sqlx::query_as::<_, EventRegistration>(&format!(
            "SELECT {REGISTRATION_COLUMNS} FROM event_registrations WHERE registration_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(registration)
    }

    /// Register a user into a PUBLISHED event. The (event, user) unique
    /// key rejects duplicate registrations.
    pub async fn create(
        &self,
        event_id: Uuid,
        user_id: Uuid,
        form_data: Option<serde_json::Value>,
    ) -> Result<EventRegistration> {
        let event_status: Option<String> =
            sqlx::query_scalar("SELECT status FROM events WHERE event_id = $1")
                .bind(event_id)
                .fetch_optional(self.pool)
                .await?;

        match event_status.as_deref() {
            None => return Err(StorageError::NotFound),
            Some(status::PUBLISHED) => {}
            Some(other) => {
                return Err(StorageError::InvalidState(format!(
                    "Event is not open for registration ({other})"
                )));
            }
        }

        let registration = sqlx::query_as::<_, EventRegistration>(&format!(
            r#"
            INSERT INTO event_registrations (event_id, user_id, form_data)
            VALUES ($1, $2, $3)
            RETURNING {REGISTRATION_COLUMNS}
            "#
        ))
        .bind(event_id)
        .bind(user_id)
        .bind(form_data)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e {
                if db_err.code().as_deref() == Some("23505") {
                    return StorageError::ConstraintViolation(
                        "Already registered for this event".to_string(),
                    );
                }
            }
            StorageError::from(e)
        })?;

        Ok(registration)
    }

    /// List registrations for an event, newest first.
    pub async fn list_for_event(&self, event_id: Uuid) -> Result<Vec<EventRegistration>> {
        let registrations = sqlx::query_as::<_, EventRegistration>(&format!(
            r#"
            SELECT {REGISTRATION_COLUMNS}
            FROM event_registrations
            WHERE event_id = $1
            ORDER BY created_at DESC
            "#
        ))
        .bind(event_id)
        .fetch_all(self.pool)
        .await?;

        Ok(registrations)
    }

    /// Mark or unmark attendance. Idempotent: re-marking the same state
    /// is a no-op. The first transition to marked credits the event's
    /// participant reward points to the attendee's ledger, inside the
    /// same transaction as the attendance write.
    pub async fn mark_attendance(
        &self,
        registration_id: Uuid,
        attendance: bool,
        marked_by: Uuid,
    ) -> Result<EventRegistration> {
        let mut tx = self.pool.begin().await?;

        #[derive(sqlx::FromRow)]
        struct Row {
            user_id: Uuid,
            attendance_marked: bool,
            event_title: String,
            participant_reward_points: i32,
        }

        let row = sqlx::query_as::<_, Row>(
            r#"
            SELECT r.user_id, r.attendance_marked,
                   e.title AS event_title, e.participant_reward_points
            FROM event_registrations r
            INNER JOIN events e ON e.event_id = r.event_id
            WHERE r.registration_id = $1
            FOR UPDATE OF r
            "#,
        )
        .bind(registration_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(StorageError::NotFound)?;

        if row.attendance_marked == attendance {
            tx.rollback().await?;
            return self.find_by_id(registration_id).await;
        }

        let registration = sqlx::query_as::<_, EventRegistration>(&format!(
            r#"
            UPDATE event_registrations
            SET attendance_marked = $2,
                attendance_marked_at = CURRENT_TIMESTAMP,
                attendance_marked_by = $3
            WHERE registration_id = $1
            RETURNING {REGISTRATION_COLUMNS}
            "#
        ))
        .bind(registration_id)
        .bind(attendance)
        .bind(marked_by)
        .fetch_one(&mut *tx)
        .await?;

        if attendance {
            rewards::credit_points(
                &mut tx,
                row.user_id,
                row.participant_reward_points,
                "Event Attendance",
                &format!("Attended {}", row.event_title),
            )
            .await?;
        }

        tx.commit().await?;

        Ok(registration)
    }
}
