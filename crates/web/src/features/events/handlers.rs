use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use storage::{
    Database,
    dto::event::{CreateEventRequest, EventResponse},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/events",
    request_body = CreateEventRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Event created", body = EventResponse),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "events"
)]
pub async fn create_event(
    State(db): State<Database>,
    Json(request): Json<CreateEventRequest>,
) -> Result<Response, WebError> {
    request.validate()?;

    let event = services::create_event(db.pool(), &request).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "data": EventResponse::from(event) })),
    )
        .into_response())
}

#[utoipa::path(
    get,
    path = "/api/events",
    responses(
        (status = 200, description = "List all events", body = Vec<EventResponse>)
    ),
    tag = "events"
)]
pub async fn list_events(State(db): State<Database>) -> Result<Response, WebError> {
    let events = services::list_events(db.pool()).await?;

    let data: Vec<EventResponse> = events.into_iter().map(EventResponse::from).collect();

    Ok(Json(json!({ "success": true, "data": data })).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/{id}",
    params(("id" = Uuid, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Event found", body = EventResponse),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn get_event(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let event = services::get_event(db.pool(), id).await?;

    Ok(Json(json!({ "success": true, "data": EventResponse::from(event) })).into_response())
}

#[utoipa::path(
    post,
    path = "/api/events/{id}/publish",
    params(("id" = Uuid, Path, description = "Event ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Event published", body = EventResponse),
        (status = 400, description = "Event is not in DRAFT status"),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn publish_event(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let event = services::publish_event(db.pool(), id).await?;

    Ok(Json(json!({ "success": true, "data": EventResponse::from(event) })).into_response())
}
