use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::EventRegistration;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    /// Free-form answers to the event's registration form. The
    /// `teamName` key, when present, surfaces on leaderboards.
    #[schema(value_type = Object)]
    pub form_data: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct MarkAttendanceRequest {
    pub attendance: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegistrationResponse {
    pub registration_id: Uuid,
    pub event_id: Uuid,
    pub user_id: Uuid,
    pub team_name: Option<String>,
    pub payment_status: String,
    pub attendance_marked: bool,
    pub reward_points: i32,
    pub result_position: Option<i32>,
    pub result_is_winner: bool,
    pub result_prize: Option<String>,
    pub status: String,
    pub created_at: chrono::NaiveDateTime,
}

impl From<EventRegistration> for RegistrationResponse {
    fn from(registration: EventRegistration) -> Self {
        let team_name = registration.team_name();
        Self {
            registration_id: registration.registration_id,
            event_id: registration.event_id,
            user_id: registration.user_id,
            team_name,
            payment_status: registration.payment_status,
            attendance_marked: registration.attendance_marked,
            reward_points: registration.reward_points,
            result_position: registration.result_position,
            result_is_winner: registration.result_is_winner,
            result_prize: registration.result_prize,
            status: registration.status,
            created_at: registration.created_at,
        }
    }
}
