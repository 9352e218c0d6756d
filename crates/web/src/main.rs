use anyhow::Context;
use axum::Router;
use storage::Database;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;

use config::Config;
use middleware::auth::ApiKeys;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::events::handlers::create_event,
        features::events::handlers::list_events,
        features::events::handlers::get_event,
        features::events::handlers::publish_event,
        features::registrations::handlers::register,
        features::registrations::handlers::list_registrations,
        features::registrations::handlers::mark_attendance,
        features::judges::handlers::assign_judge,
        features::judges::handlers::list_event_judges,
        features::judges::handlers::verify_judge,
        features::judges::handlers::judge_scores,
        features::judges::handlers::submit_score,
        features::leaderboards::handlers::event_leaderboard,
        features::leaderboards::handlers::global_leaderboard,
        features::leaderboards::handlers::finalize_event,
        features::rewards::handlers::user_rewards,
    ),
    components(
        schemas(
            storage::dto::event::CreateEventRequest,
            storage::dto::event::EventResponse,
            storage::dto::registration::RegisterRequest,
            storage::dto::registration::MarkAttendanceRequest,
            storage::dto::registration::RegistrationResponse,
            storage::dto::judge::AssignJudgeRequest,
            storage::dto::judge::JudgeResponse,
            storage::dto::judge::EventJudgeEntry,
            storage::dto::score::CriteriaRequest,
            storage::dto::score::SubmitScoreRequest,
            storage::dto::score::ScoreResponse,
            storage::dto::leaderboard::EventLeaderboardEntry,
            storage::dto::leaderboard::EventLeaderboard,
            storage::dto::leaderboard::GlobalLeaderboardEntry,
            storage::dto::rewards::UserRewardsResponse,
            storage::dto::rewards::RewardHistoryResponse,
            storage::models::Event,
            storage::models::EventRegistration,
            storage::models::Judge,
            storage::models::Score,
            storage::models::User,
            storage::models::RewardHistoryEntry,
        )
    ),
    tags(
        (name = "events", description = "Event lifecycle endpoints"),
        (name = "registrations", description = "Event registration and attendance endpoints"),
        (name = "judges", description = "Judge assignment and scoring endpoints"),
        (name = "leaderboards", description = "Leaderboard and finalization endpoints"),
        (name = "rewards", description = "Reward ledger endpoints"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting campus events API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let api_keys = ApiKeys::from_comma_separated(&config.api_keys);

    let api = Router::new()
        .nest("/events", features::events::routes::routes(api_keys.clone()))
        .merge(features::registrations::routes::routes(api_keys.clone()))
        .merge(features::judges::routes::routes(api_keys.clone()))
        .merge(features::leaderboards::routes::routes(api_keys.clone()))
        .merge(features::rewards::routes::routes());

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api", api)
        .layer(CorsLayer::permissive())
        .with_state(db);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind server address")?;

    axum::serve(listener, app).await?;

    Ok(())
}
