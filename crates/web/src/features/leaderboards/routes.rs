use axum::{
    Router, middleware,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{event_leaderboard, finalize_event, global_leaderboard};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/events/:id/finalize", post(finalize_event))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/events/:id/leaderboard", get(event_leaderboard))
        .route("/leaderboards/global", get(global_leaderboard))
        .merge(protected)
}
