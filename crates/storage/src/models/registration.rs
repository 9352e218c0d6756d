use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

pub mod payment_status {
    pub const FREE: &str = "FREE";
    pub const PENDING: &str = "PENDING";
    pub const PAID: &str = "PAID";
    pub const FAILED: &str = "FAILED";
}

pub mod registration_status {
    pub const REGISTERED: &str = "REGISTERED";
    pub const CANCELLED: &str = "CANCELLED";
    pub const COMPLETED: &str = "COMPLETED";
}

/// A participant's entry into one event. At most one row per
/// (event, user) pair, enforced by a unique index.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct EventRegistration {
    pub registration_id: Uuid,
    pub event_id: Uuid,
    pub user_id: Uuid,
    #[schema(value_type = Object)]
    pub form_data: Option<serde_json::Value>,
    pub payment_status: String,
    pub attendance_marked: bool,
    pub attendance_marked_at: Option<chrono::NaiveDateTime>,
    pub attendance_marked_by: Option<Uuid>,
    pub reward_points: i32,
    pub result_position: Option<i32>,
    pub result_is_winner: bool,
    pub result_prize: Option<String>,
    pub rating: Option<i32>,
    pub feedback: Option<String>,
    pub status: String,
    pub created_at: chrono::NaiveDateTime,
}

impl EventRegistration {
    /// Team name surfaced on leaderboards, taken from the registration form.
    pub fn team_name(&self) -> Option<String> {
        self.form_data
            .as_ref()
            .and_then(|data| data.get("teamName"))
            .and_then(|v| v.as_str())
            .map(String::from)
    }
}
