use std::sync::Arc;

use sea_orm::Database;
use tracing::info;

use ecourse_auth_types::identity::AccessTokenSecret;
use ecourse_core::config::Config as _;
use ecourse_core::tracing::init_tracing;
use ecourse_courses::config::CoursesConfig;
use ecourse_courses::domain::types::OAuth2Info;
use ecourse_courses::router::build_router;
use ecourse_courses::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = CoursesConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        access_token_secret: AccessTokenSecret::new(config.access_token_secret),
        oauth2_info: Arc::new(OAuth2Info {
            client_id: config.oauth2_client_id,
            client_secret: config.oauth2_client_secret,
        }),
        public_base_url: Arc::from(config.public_base_url),
    };

    let router = build_router(state);
    let http_addr = format!("0.0.0.0:{}", config.courses_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!("courses service listening on {http_addr}");
    axum::serve(listener, router).await.expect("server error");
}
