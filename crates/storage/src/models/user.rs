use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub user_id: Uuid,
    pub full_name: String,
    pub email: String,
    pub reward_points: i32,
    pub reward_tier: String,
    pub created_at: chrono::NaiveDateTime,
}

/// One append-only entry in a user's reward ledger.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RewardHistoryEntry {
    pub entry_id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub created_at: chrono::NaiveDateTime,
}
