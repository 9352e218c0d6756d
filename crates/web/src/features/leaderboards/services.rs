use sqlx::PgPool;
use storage::{
    dto::leaderboard::{EventLeaderboard, GlobalLeaderboardEntry},
    error::Result,
    repository::leaderboard::LeaderboardRepository,
    services::finalization::{self, FinalizationSummary},
};
use uuid::Uuid;

/// Per-event leaderboard with dense ranking and lock state
pub async fn event_leaderboard(pool: &PgPool, event_id: Uuid) -> Result<EventLeaderboard> {
    let repo = LeaderboardRepository::new(pool);
    repo.event_leaderboard(event_id).await
}

/// Global leaderboard over finalized events only
pub async fn global_leaderboard(pool: &PgPool, limit: i64) -> Result<Vec<GlobalLeaderboardEntry>> {
    let repo = LeaderboardRepository::new(pool);
    repo.global_leaderboard(limit).await
}

/// Finalize an event: compute winners, pay out rewards, lock scores
pub async fn finalize_event(pool: &PgPool, event_id: Uuid) -> Result<FinalizationSummary> {
    finalization::finalize_event(pool, event_id).await
}
