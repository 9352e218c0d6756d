use sqlx::PgPool;
use storage::{
    dto::judge::{EventJudgeEntry, JudgeResponse},
    error::Result,
    models::Score,
    repository::{judge::JudgeRepository, score::ScoreRepository},
    services::scoring::Criteria,
};
use uuid::Uuid;

/// Assign a user as judge for an event (idempotent)
pub async fn assign_judge(pool: &PgPool, event_id: Uuid, user_id: Uuid) -> Result<JudgeResponse> {
    let repo = JudgeRepository::new(pool);
    let judge = repo.assign(event_id, user_id).await?;
    let events = repo.events_for(judge.judge_id).await?;

    Ok(JudgeResponse::new(judge, events))
}

/// List judges assigned to an event
pub async fn list_event_judges(pool: &PgPool, event_id: Uuid) -> Result<Vec<EventJudgeEntry>> {
    let repo = JudgeRepository::new(pool);
    repo.list_for_event(event_id).await
}

/// Verify the caller is an active judge for an event
pub async fn verify_judge(pool: &PgPool, user_id: Uuid, event_id: Uuid) -> Result<JudgeResponse> {
    let repo = JudgeRepository::new(pool);
    let judge = repo.find_active_for_event(user_id, event_id).await?;
    let events = repo.events_for(judge.judge_id).await?;

    Ok(JudgeResponse::new(judge, events))
}

/// Scores the caller submitted for an event
pub async fn judge_scores(pool: &PgPool, user_id: Uuid, event_id: Uuid) -> Result<Vec<Score>> {
    let repo = JudgeRepository::new(pool);
    let judge = repo.find_active_for_event(user_id, event_id).await?;

    ScoreRepository::new(pool)
        .list_for_judge(event_id, judge.judge_id)
        .await
}

/// Submit or overwrite the caller's score for a registration
pub async fn submit_score(
    pool: &PgPool,
    registration_id: Uuid,
    judge_user_id: Uuid,
    criteria: &Criteria,
    feedback: Option<&str>,
) -> Result<Score> {
    let repo = ScoreRepository::new(pool);
    repo.submit(registration_id, judge_user_id, criteria, feedback)
        .await
}
