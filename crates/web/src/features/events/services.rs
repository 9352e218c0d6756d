use sqlx::PgPool;
use storage::{
    dto::event::CreateEventRequest, error::Result, models::Event, repository::event::EventRepository,
};
use uuid::Uuid;

/// Create a new event in DRAFT status
pub async fn create_event(pool: &PgPool, request: &CreateEventRequest) -> Result<Event> {
    let repo = EventRepository::new(pool);
    repo.create(request).await
}

/// List all events
pub async fn list_events(pool: &PgPool) -> Result<Vec<Event>> {
    let repo = EventRepository::new(pool);
    repo.list().await
}

/// Get event by ID
pub async fn get_event(pool: &PgPool, id: Uuid) -> Result<Event> {
    let repo = EventRepository::new(pool);
    repo.find_by_id(id).await
}

/// Publish a DRAFT event
pub async fn publish_event(pool: &PgPool, id: Uuid) -> Result<Event> {
    let repo = EventRepository::new(pool);
    repo.publish(id).await
}
