use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::reward_tier::tier_by_name;
use crate::models::{RewardHistoryEntry, User};

#[derive(Debug, Serialize, ToSchema)]
pub struct RewardHistoryResponse {
    pub title: String,
    pub description: String,
    pub date: chrono::NaiveDateTime,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserRewardsResponse {
    pub user_id: Uuid,
    pub name: String,
    pub points: i32,
    pub tier: String,
    pub perks: Vec<String>,
    pub history: Vec<RewardHistoryResponse>,
}

impl UserRewardsResponse {
    pub fn new(user: User, history: Vec<RewardHistoryEntry>) -> Self {
        let tier = tier_by_name(&user.reward_tier);
        Self {
            user_id: user.user_id,
            name: user.full_name,
            points: user.reward_points,
            tier: tier.name.to_string(),
            perks: tier.perks.iter().map(|p| p.to_string()).collect(),
            history: history
                .into_iter()
                .map(|entry| RewardHistoryResponse {
                    title: entry.title,
                    description: entry.description,
                    date: entry.created_at,
                })
                .collect(),
        }
    }
}
