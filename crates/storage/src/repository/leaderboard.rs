use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::dto::leaderboard::{EventLeaderboard, EventLeaderboardEntry, GlobalLeaderboardEntry};
use crate::dto::score::decimal_to_f64;
use crate::error::Result;
use crate::services::scoring::dense_ranks;

#[derive(FromRow)]
struct EventRow {
    registration_id: Uuid,
    name: String,
    team_name: Option<String>,
    avg_score: Decimal,
    judges: i64,
}

#[derive(FromRow)]
struct GlobalRow {
    user_id: Uuid,
    name: String,
    total_score: Decimal,
    avg_score: Decimal,
    events_count: i64,
}

/// Read-only leaderboard projections built from aggregated scores.
pub struct LeaderboardRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> LeaderboardRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Per-event leaderboard: average of all judges' totals per
    /// registration, judge-count tie-break, dense ranking.
    /// `locked` reports whether finalization has already swept the
    /// event's scores.
    pub async fn event_leaderboard(&self, event_id: Uuid) -> Result<EventLeaderboard> {
        let rows = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT s.registration_id,
                   u.full_name AS name,
                   r.form_data->>'teamName' AS team_name,
                   AVG(s.total) AS avg_score,
                   COUNT(*) AS judges
            FROM scores s
            INNER JOIN event_registrations r ON r.registration_id = s.registration_id
            INNER JOIN users u ON u.user_id = r.user_id
            WHERE s.event_id = $1
            GROUP BY s.registration_id, u.full_name, r.form_data->>'teamName'
            ORDER BY AVG(s.total) DESC, COUNT(*) DESC
            "#,
        )
        .bind(event_id)
        .fetch_all(self.pool)
        .await?;

        let unlocked_exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM scores WHERE event_id = $1 AND NOT locked)",
        )
        .bind(event_id)
        .fetch_one(self.pool)
        .await?;

        let averages: Vec<Decimal> = rows.iter().map(|row| row.avg_score.round_dp(2)).collect();
        let ranks = dense_ranks(&averages);

        let entries = rows
            .into_iter()
            .zip(ranks)
            .map(|(row, rank)| EventLeaderboardEntry {
                rank,
                registration_id: row.registration_id,
                name: row.name,
                team_name: row.team_name,
                avg_score: decimal_to_f64(row.avg_score.round_dp(2)),
                judges: row.judges,
            })
            .collect();

        Ok(EventLeaderboard {
            entries,
            locked: !unlocked_exists,
        })
    }

    /// Global leaderboard over locked scores only, so unfinalized events
    /// never contribute. Plain sequential ranking, no tie handling.
    pub async fn global_leaderboard(&self, limit: i64) -> Result<Vec<GlobalLeaderboardEntry>> {
        let rows = sqlx::query_as::<_, GlobalRow>(
            r#"
            SELECT r.user_id,
                   u.full_name AS name,
                   SUM(s.total) AS total_score,
                   AVG(s.total) AS avg_score,
                   COUNT(DISTINCT s.event_id) AS events_count
            FROM scores s
            INNER JOIN event_registrations r ON r.registration_id = s.registration_id
            INNER JOIN users u ON u.user_id = r.user_id
            WHERE s.locked
            GROUP BY r.user_id, u.full_name
            ORDER BY SUM(s.total) DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        let entries = rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| GlobalLeaderboardEntry {
                rank: i as i64 + 1,
                user_id: row.user_id,
                name: row.name,
                total_score: decimal_to_f64(row.total_score.round_dp(2)),
                avg_score: decimal_to_f64(row.avg_score.round_dp(2)),
                events_count: row.events_count,
            })
            .collect();

        Ok(entries)
    }
}
