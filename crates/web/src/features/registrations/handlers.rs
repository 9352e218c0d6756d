use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use storage::{
    Database,
    dto::registration::{MarkAttendanceRequest, RegisterRequest, RegistrationResponse},
};
use uuid::Uuid;

use crate::error::WebError;
use crate::middleware::identity::Identity;

use super::services;

#[utoipa::path(
    post,
    path = "/api/events/{id}/registrations",
    params(("id" = Uuid, Path, description = "Event ID")),
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Registered", body = RegistrationResponse),
        (status = 400, description = "Event not open for registration"),
        (status = 404, description = "Event not found"),
        (status = 409, description = "Already registered")
    ),
    tag = "registrations"
)]
pub async fn register(
    State(db): State<Database>,
    Path(event_id): Path<Uuid>,
    Identity(user_id): Identity,
    Json(request): Json<RegisterRequest>,
) -> Result<Response, WebError> {
    let registration =
        services::register(db.pool(), event_id, user_id, request.form_data).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "data": RegistrationResponse::from(registration) })),
    )
        .into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/{id}/registrations",
    params(("id" = Uuid, Path, description = "Event ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Registrations for the event", body = Vec<RegistrationResponse>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "registrations"
)]
pub async fn list_registrations(
    State(db): State<Database>,
    Path(event_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let registrations = services::list_for_event(db.pool(), event_id).await?;

    let data: Vec<RegistrationResponse> = registrations
        .into_iter()
        .map(RegistrationResponse::from)
        .collect();

    Ok(Json(json!({ "success": true, "data": data })).into_response())
}

#[utoipa::path(
    post,
    path = "/api/registrations/{id}/attendance",
    params(("id" = Uuid, Path, description = "Registration ID")),
    request_body = MarkAttendanceRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Attendance updated", body = RegistrationResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Registration not found")
    ),
    tag = "registrations"
)]
pub async fn mark_attendance(
    State(db): State<Database>,
    Path(registration_id): Path<Uuid>,
    Identity(marked_by): Identity,
    Json(request): Json<MarkAttendanceRequest>,
) -> Result<Response, WebError> {
    let registration =
        services::mark_attendance(db.pool(), registration_id, request.attendance, marked_by)
            .await?;

    Ok(Json(json!({
        "success": true,
        "message": "Attendance marked successfully",
        "data": RegistrationResponse::from(registration)
    }))
    .into_response())
}
