use axum::{
    Router, middleware,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{list_registrations, mark_attendance, register};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/events/:id/registrations", get(list_registrations))
        .route("/registrations/:id/attendance", post(mark_attendance))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/events/:id/registrations", post(register))
        .merge(protected)
}
