use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{RewardHistoryEntry, User};

/// Repository for the reward-ledger view of users. User provisioning
/// itself is owned by the upstream identity layer.
pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, full_name, email, reward_points, reward_tier, created_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(user)
    }

    /// A user's reward history, newest first.
    pub async fn reward_history(&self, user_id: Uuid) -> Result<Vec<RewardHistoryEntry>> {
        let entries = sqlx::query_as::<_, RewardHistoryEntry>(
            r#"
            SELECT entry_id, user_id, title, description, created_at
            FROM reward_history
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(entries)
    }
}
