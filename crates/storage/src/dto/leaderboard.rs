use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Serialize, ToSchema)]
pub struct EventLeaderboardEntry {
    pub rank: i64,
    pub registration_id: Uuid,
    pub name: String,
    pub team_name: Option<String>,
    pub avg_score: f64,
    pub judges: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EventLeaderboard {
    pub entries: Vec<EventLeaderboardEntry>,
    /// True only when no unlocked score exists for the event, i.e. the
    /// event has been finalized.
    pub locked: bool,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct GlobalLeaderboardQuery {
    pub limit: Option<u32>,
}

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 100;

impl GlobalLeaderboardQuery {
    /// Requested entry cap, clamped to 1..=100 with a default of 10.
    pub fn effective_limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT) as i64
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GlobalLeaderboardEntry {
    pub rank: i64,
    pub user_id: Uuid,
    pub name: String,
    pub total_score: f64,
    pub avg_score: f64,
    pub events_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_defaults_to_ten() {
        let query = GlobalLeaderboardQuery { limit: None };
        assert_eq!(query.effective_limit(), 10);
    }

    #[test]
    fn test_limit_is_clamped() {
        let query = GlobalLeaderboardQuery { limit: Some(0) };
        assert_eq!(query.effective_limit(), 1);

        let query = GlobalLeaderboardQuery { limit: Some(500) };
        assert_eq!(query.effective_limit(), 100);

        let query = GlobalLeaderboardQuery { limit: Some(25) };
        assert_eq!(query.effective_limit(), 25);
    }
}
