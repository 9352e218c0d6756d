use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use serde_json::json;
use storage::{Database, dto::rewards::UserRewardsResponse};
use uuid::Uuid;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/users/{id}/rewards",
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "User reward points, tier and history", body = UserRewardsResponse),
        (status = 404, description = "User not found")
    ),
    tag = "rewards"
)]
pub async fn user_rewards(
    State(db): State<Database>,
    Path(user_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let rewards = services::user_rewards(db.pool(), user_id).await?;

    Ok(Json(json!({ "success": true, "data": rewards })).into_response())
}
