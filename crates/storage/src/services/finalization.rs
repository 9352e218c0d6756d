use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::event::status;
use crate::services::rewards;
use crate::services::scoring::{self, RankedTotal};

#[derive(Debug)]
pub struct FinalizationSummary {
    pub event_id: Uuid,
    pub winners: usize,
    pub scores_locked: u64,
}

#[derive(FromRow)]
struct EventRow {
    title: String,
    status: String,
}

#[derive(FromRow)]
struct PoolRow {
    registration_id: Uuid,
    user_id: Uuid,
    total: Decimal,
}

/// Finalizes an event as one atomic unit: computes final standings from
/// the summed judge totals, writes podium results and reward payouts,
/// locks every score row, and transitions the event to COMPLETED. The
/// `FOR UPDATE` on the event row serializes concurrent finalize calls
/// and excludes racing score submissions, which take `FOR SHARE` on the
/// same row. On any failure nothing is committed.
pub async fn finalize_event(pool: &PgPool, event_id: Uuid) -> Result<FinalizationSummary> {
    let mut tx = pool.begin().await?;

    let event = sqlx::query_as::<_, EventRow>(
        r#"
        SELECT title, status
        FROM events
        WHERE event_id = $1
        FOR UPDATE
        "#,
    )
    .bind(event_id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or(StorageError::NotFound)?;

    if event.status == status::COMPLETED {
        return Err(StorageError::InvalidState(
            "Event already finalized".to_string(),
        ));
    }

    // Ranking pool for prizes: summed totals per registration, distinct
    // from the per-registration average the leaderboard view shows.
    let pool_rows = sqlx::query_as::<_, PoolRow>(
        r#"
        SELECT s.registration_id, r.user_id, SUM(s.total) AS total
        FROM scores s
        INNER JOIN event_registrations r ON r.registration_id = s.registration_id
        WHERE s.event_id = $1
        GROUP BY s.registration_id, r.user_id
        ORDER BY SUM(s.total) DESC
        "#,
    )
    .bind(event_id)
    .fetch_all(&mut *tx)
    .await?;

    if pool_rows.is_empty() {
        return Err(StorageError::InvalidState("No scores found".to_string()));
    }

    let standings: Vec<RankedTotal> = pool_rows
        .into_iter()
        .map(|row| RankedTotal {
            registration_id: row.registration_id,
            user_id: row.user_id,
            total: row.total,
        })
        .collect();

    let awards = scoring::podium(&standings);

    for award in &awards {
        sqlx::query(
            r#"
            UPDATE event_registrations
            SET result_position = $2,
                result_is_winner = TRUE,
                result_prize = $3,
                reward_points = $4
            WHERE registration_id = $1
            "#,
        )
        .bind(award.registration_id)
        .bind(award.position)
        .bind(award.prize)
        .bind(award.points)
        .execute(&mut *tx)
        .await?;

        rewards::credit_points(
            &mut tx,
            award.user_id,
            award.points,
            "Event Result",
            &format!("Finished #{} in {}", award.position, event.title),
        )
        .await?;
    }

    let locked = sqlx::query(
        r#"
        UPDATE scores
        SET locked = TRUE
        WHERE event_id = $1
        "#,
    )
    .bind(event_id)
    .execute(&mut *tx)
    .await?
    .rows_affected();

    sqlx::query(
        r#"
        UPDATE events
        SET status = $2
        WHERE event_id = $1
        "#,
    )
    .bind(event_id)
    .bind(status::COMPLETED)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::info!(
        %event_id,
        winners = awards.len(),
        scores_locked = locked,
        "event finalized"
    );

    Ok(FinalizationSummary {
        event_id,
        winners: awards.len(),
        scores_locked: locked,
    })
}
