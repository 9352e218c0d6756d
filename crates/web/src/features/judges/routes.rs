use axum::{
    Router, middleware,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{assign_judge, judge_scores, list_event_judges, submit_score, verify_judge};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/events/:id/judges", post(assign_judge))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/events/:id/judges", get(list_event_judges))
        .route("/events/:id/judges/verify", get(verify_judge))
        .route("/events/:id/judges/scores", get(judge_scores))
        .route("/scores", post(submit_score))
        .merge(protected)
}
