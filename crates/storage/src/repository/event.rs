use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::event::CreateEventRequest;
use crate::error::{Result, StorageError};
use crate::models::Event;
use crate::models::event::status;

const EVENT_COLUMNS: &str = "event_id, title, description, status, \
     organizer_reward_points, participant_reward_points, created_at";

/// Repository for Event database operations
pub struct EventRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> EventRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all events, newest first.
    pub async fn list(&self) -> Result<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events ORDER BY created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(events)
    }

    /// Get an event by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE event_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(event)
    }

    /// Create a new event in DRAFT status.
    pub async fn create(&self, req: &CreateEventRequest) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(&format!(
            r#"
            INSERT INTO events (title, description, organizer_reward_points, participant_reward_points)
            VALUES ($1, $2, $3, $4)
            RETURNING {EVENT_COLUMNS}
            "#
        ))
        .bind(&req.title)
        .bind(&req.description)
        .bind(req.organizer_reward_points)
        .bind(req.participant_reward_points)
        .fetch_one(self.pool)
        .await?;

        Ok(event)
    }

    /// Publish a DRAFT event. Any other starting status is rejected.
    pub async fn publish(&self, id: Uuid) -> Result<Event> {
        let event = self.find_by_id(id).await?;

        if event.status != status::DRAFT {
            return Err(StorageError::InvalidState(format!(
                "Cannot publish event in {} status",
                event.status
            )));
        }

        let event = sqlx::query_as::<_, Event>(&format!(
            r#"
            UPDATE events
            SET status = $2
            WHERE event_id = $1 AND status = $3
            RETURNING {EVENT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(status::PUBLISHED)
        .bind(status::DRAFT)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| StorageError::InvalidState("Event is no longer in DRAFT".to_string()))?;

        Ok(event)
    }
}
