use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

pub mod status {
    pub const DRAFT: &str = "DRAFT";
    pub const PUBLISHED: &str = "PUBLISHED";
    pub const COMPLETED: &str = "COMPLETED";
    pub const CANCELLED: &str = "CANCELLED";
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Event {
    pub event_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub organizer_reward_points: i32,
    pub participant_reward_points: i32,
    pub created_at: chrono::NaiveDateTime,
}

impl Event {
    /// An event accepts scores until it is finalized or cancelled.
    pub fn is_open_for_scoring(&self) -> bool {
        matches!(self.status.as_str(), status::DRAFT | status::PUBLISHED)
    }

    pub fn is_completed(&self) -> bool {
        self.status == status::COMPLETED
    }
}
