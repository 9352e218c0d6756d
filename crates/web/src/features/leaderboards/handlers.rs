use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use serde_json::json;
use storage::{
    Database,
    dto::leaderboard::{EventLeaderboardEntry, GlobalLeaderboardEntry, GlobalLeaderboardQuery},
};
use uuid::Uuid;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/events/{id}/leaderboard",
    params(("id" = Uuid, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Event leaderboard with dense ranks and lock state", body = Vec<EventLeaderboardEntry>)
    ),
    tag = "leaderboards"
)]
pub async fn event_leaderboard(
    State(db): State<Database>,
    Path(event_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let leaderboard = services::event_leaderboard(db.pool(), event_id).await?;

    Ok(Json(json!({
        "success": true,
        "data": leaderboard.entries,
        "locked": leaderboard.locked
    }))
    .into_response())
}

#[utoipa::path(
    get,
    path = "/api/leaderboards/global",
    params(GlobalLeaderboardQuery),
    responses(
        (status = 200, description = "Global leaderboard over finalized events", body = Vec<GlobalLeaderboardEntry>)
    ),
    tag = "leaderboards"
)]
pub async fn global_leaderboard(
    State(db): State<Database>,
    Query(query): Query<GlobalLeaderboardQuery>,
) -> Result<Response, WebError> {
    let entries = services::global_leaderboard(db.pool(), query.effective_limit()).await?;

    Ok(Json(json!({ "success": true, "data": entries })).into_response())
}

#[utoipa::path(
    post,
    path = "/api/events/{id}/finalize",
    params(("id" = Uuid, Path, description = "Event ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Event finalized: winners assigned, scores locked"),
        (status = 400, description = "Already finalized, or no scores found"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Event not found")
    ),
    tag = "leaderboards"
)]
pub async fn finalize_event(
    State(db): State<Database>,
    Path(event_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let summary = services::finalize_event(db.pool(), event_id).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Event finalized successfully",
        "data": {
            "status": "finalized",
            "winners": summary.winners,
            "scores_locked": summary.scores_locked
        }
    }))
    .into_response())
}
