use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::Event;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEventRequest {
    #[validate(length(min = 3, max = 200, message = "title must be 3-200 characters"))]
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0, max = 1000))]
    pub organizer_reward_points: i32,
    #[serde(default = "default_participant_reward_points")]
    #[validate(range(min = 0, max = 1000))]
    pub participant_reward_points: i32,
}

fn default_participant_reward_points() -> i32 {
    5
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EventResponse {
    pub event_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub organizer_reward_points: i32,
    pub participant_reward_points: i32,
    pub created_at: chrono::NaiveDateTime,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            event_id: event.event_id,
            title: event.title,
            description: event.description,
            status: event.status,
            organizer_reward_points: event.organizer_reward_points,
            participant_reward_points: event.participant_reward_points,
            created_at: event.created_at,
        }
    }
}
