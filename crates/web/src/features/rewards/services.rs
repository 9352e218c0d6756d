use sqlx::PgPool;
use storage::{
    dto::rewards::UserRewardsResponse, error::Result, repository::user::UserRepository,
};
use uuid::Uuid;

/// A user's reward points, tier with perks, and ledger history
pub async fn user_rewards(pool: &PgPool, user_id: Uuid) -> Result<UserRewardsResponse> {
    let repo = UserRepository::new(pool);
    let user = repo.find_by_id(user_id).await?;
    let history = repo.reward_history(user_id).await?;

    Ok(UserRewardsResponse::new(user, history))
}
