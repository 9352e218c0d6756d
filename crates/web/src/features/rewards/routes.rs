use axum::{Router, routing::get};
use storage::Database;

use super::handlers::user_rewards;

pub fn routes() -> Router<Database> {
    Router::new().route("/users/:id/rewards", get(user_rewards))
}
