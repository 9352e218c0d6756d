use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::Judge;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AssignJudgeRequest {
    pub user_id: Uuid,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct JudgeResponse {
    pub judge_id: Uuid,
    pub user_id: Uuid,
    pub role: String,
    pub is_active: bool,
    pub events: Vec<Uuid>,
}

impl JudgeResponse {
    pub fn new(judge: Judge, events: Vec<Uuid>) -> Self {
        Self {
            judge_id: judge.judge_id,
            user_id: judge.user_id,
            role: judge.role,
            is_active: judge.is_active,
            events,
        }
    }
}

/// A judge listed for an event, with joined user info.
#[derive(Debug, Serialize, ToSchema)]
pub struct EventJudgeEntry {
    pub judge_id: Uuid,
    pub user_id: Uuid,
    pub full_name: String,
    pub email: String,
    pub role: String,
    pub is_active: bool,
    pub assigned_at: chrono::NaiveDateTime,
}
