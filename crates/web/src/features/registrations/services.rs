use sqlx::PgPool;
use storage::{
    error::Result, models::EventRegistration, repository::registration::RegistrationRepository,
};
use uuid::Uuid;

/// Register a user into an event
pub async fn register(
    pool: &PgPool,
    event_id: Uuid,
    user_id: Uuid,
    form_data: Option<serde_json::Value>,
) -> Result<EventRegistration> {
    let repo = RegistrationRepository::new(pool);
    repo.create(event_id, user_id, form_data).await
}

/// List registrations for an event
pub async fn list_for_event(pool: &PgPool, event_id: Uuid) -> Result<Vec<EventRegistration>> {
    let repo = RegistrationRepository::new(pool);
    repo.list_for_event(event_id).await
}

/// Mark or unmark attendance, crediting participant reward points on
/// the first transition to marked
pub async fn mark_attendance(
    pool: &PgPool,
    registration_id: Uuid,
    attendance: bool,
    marked_by: Uuid,
) -> Result<EventRegistration> {
    let repo = RegistrationRepository::new(pool);
    repo.mark_attendance(registration_id, attendance, marked_by)
        .await
}
