use sqlx::{Postgres, Transaction};
use uuid::Uuid;

use crate::error::Result;
use crate::models::reward_tier::tier_for_points;

/// Credits reward points to a user's ledger inside the caller's
/// transaction: bumps the counter, appends a history entry, and
/// recomputes the tier from the new balance. This is the only path that
/// ever changes a tier; it runs at its two join points (attendance
/// marking and finalization payout).
pub async fn credit_points(
    tx: &mut Transaction<'_, Postgres>,
    user_id: Uuid,
    points: i32,
    title: &str,
    description: &str,
) -> Result<i32> {
    let new_balance: i32 = sqlx::query_scalar(
        r#"
        UPDATE users
        SET reward_points = reward_points + $2
        WHERE user_id = $1
        RETURNING reward_points
        "#,
    )
    .bind(user_id)
    .bind(points)
    .fetch_one(&mut **tx)
    .await?;

    sqlx::query(
        r#"
        INSERT INTO reward_history (user_id, title, description)
        VALUES ($1, $2, $3)
        "#,
    )
    .bind(user_id)
    .bind(title)
    .bind(description)
    .execute(&mut **tx)
    .await?;

    let tier = tier_for_points(new_balance);
    sqlx::query(
        r#"
        UPDATE users
        SET reward_tier = $2
        WHERE user_id = $1 AND reward_tier <> $2
        "#,
    )
    .bind(user_id)
    .bind(tier)
    .execute(&mut **tx)
    .await?;

    Ok(new_balance)
}
