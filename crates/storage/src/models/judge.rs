use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

pub mod role {
    pub const JUDGE: &str = "JUDGE";
    pub const HEAD_JUDGE: &str = "HEAD_JUDGE";
}

/// A person's judging authority. One row per user; event scope lives in
/// the judge_events join table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Judge {
    pub judge_id: Uuid,
    pub user_id: Uuid,
    pub role: String,
    pub is_active: bool,
    pub created_at: chrono::NaiveDateTime,
}
