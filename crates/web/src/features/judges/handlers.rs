use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use serde_json::json;
use storage::{
    Database,
    dto::{
        judge::{AssignJudgeRequest, EventJudgeEntry, JudgeResponse},
        score::{ScoreResponse, SubmitScoreRequest},
    },
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::middleware::identity::Identity;

use super::services;

#[utoipa::path(
    post,
    path = "/api/events/{id}/judges",
    params(("id" = Uuid, Path, description = "Event ID")),
    request_body = AssignJudgeRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Judge assigned", body = JudgeResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Event not found")
    ),
    tag = "judges"
)]
pub async fn assign_judge(
    State(db): State<Database>,
    Path(event_id): Path<Uuid>,
    Json(request): Json<AssignJudgeRequest>,
) -> Result<Response, WebError> {
    let judge = services::assign_judge(db.pool(), event_id, request.user_id).await?;

    Ok(Json(json!({ "success": true, "data": judge })).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/{id}/judges",
    params(("id" = Uuid, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Judges assigned to the event", body = Vec<EventJudgeEntry>),
        (status = 404, description = "Event not found")
    ),
    tag = "judges"
)]
pub async fn list_event_judges(
    State(db): State<Database>,
    Path(event_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let judges = services::list_event_judges(db.pool(), event_id).await?;

    Ok(Json(json!({ "success": true, "data": judges })).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/{id}/judges/verify",
    params(("id" = Uuid, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Caller's judge record for the event", body = JudgeResponse),
        (status = 403, description = "Not assigned as judge")
    ),
    tag = "judges"
)]
pub async fn verify_judge(
    State(db): State<Database>,
    Path(event_id): Path<Uuid>,
    Identity(user_id): Identity,
) -> Result<Response, WebError> {
    let judge = services::verify_judge(db.pool(), user_id, event_id).await?;

    Ok(Json(json!({ "success": true, "data": judge })).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/{id}/judges/scores",
    params(("id" = Uuid, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Scores the caller submitted for the event", body = Vec<ScoreResponse>),
        (status = 403, description = "Not assigned as judge")
    ),
    tag = "judges"
)]
pub async fn judge_scores(
    State(db): State<Database>,
    Path(event_id): Path<Uuid>,
    Identity(user_id): Identity,
) -> Result<Response, WebError> {
    let scores = services::judge_scores(db.pool(), user_id, event_id).await?;

    let data: Vec<ScoreResponse> = scores.into_iter().map(ScoreResponse::from).collect();

    Ok(Json(json!({ "success": true, "data": data })).into_response())
}

#[utoipa::path(
    post,
    path = "/api/scores",
    request_body = SubmitScoreRequest,
    responses(
        (status = 200, description = "Score recorded", body = ScoreResponse),
        (status = 400, description = "Validation failed"),
        (status = 403, description = "Not assigned as judge, or scores locked"),
        (status = 404, description = "Registration not found")
    ),
    tag = "judges"
)]
pub async fn submit_score(
    State(db): State<Database>,
    Identity(user_id): Identity,
    Json(request): Json<SubmitScoreRequest>,
) -> Result<Response, WebError> {
    request.validate()?;

    let criteria = request.criteria.to_criteria();
    let score = services::submit_score(
        db.pool(),
        request.registration_id,
        user_id,
        &criteria,
        request.feedback.as_deref(),
    )
    .await?;

    Ok(Json(json!({ "success": true, "data": ScoreResponse::from(score) })).into_response())
}
