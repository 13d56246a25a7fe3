use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue};
use axum_test::TestServer;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use ecourse_auth_types::identity::AccessTokenSecret;
use ecourse_courses::domain::types::OAuth2Info;
use ecourse_courses::router::build_router;
use ecourse_courses::state::AppState;
use ecourse_courses_migration::Migrator;
use ecourse_courses_schema::{categories, courses, lessons, users};
use ecourse_testing::auth::{MockAuth, TEST_ACCESS_TOKEN_SECRET};

pub const PUBLIC_BASE_URL: &str = "http://courses.test";

pub struct TestApp {
    pub server: TestServer,
    pub db: DatabaseConnection,
}

/// Fresh in-memory database with the real schema behind the real router.
pub async fn spawn_app() -> TestApp {
    // One connection so every query sees the same in-memory database.
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(options).await.unwrap();
    Migrator::up(&db, None).await.unwrap();

    let state = AppState {
        db: db.clone(),
        access_token_secret: AccessTokenSecret::new(TEST_ACCESS_TOKEN_SECRET),
        oauth2_info: Arc::new(OAuth2Info {
            client_id: "test-client".to_owned(),
            client_secret: "test-client-secret".to_owned(),
        }),
        public_base_url: Arc::from(PUBLIC_BASE_URL),
    };
    let server = TestServer::new(build_router(state)).unwrap();
    TestApp { server, db }
}

pub fn bearer(user_id: i32) -> (HeaderName, HeaderValue) {
    MockAuth::new(user_id).header()
}

// ── Seed helpers ─────────────────────────────────────────────────────────────

pub async fn seed_user(db: &DatabaseConnection, username: &str) -> users::Model {
    users::ActiveModel {
        username: Set(username.to_owned()),
        password_hash: Set("not-a-real-hash".to_owned()),
        email: Set(format!("{username}@example.com")),
        first_name: Set(String::new()),
        last_name: Set(String::new()),
        avatar: Set(None),
        is_active: Set(true),
        date_joined: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn seed_category(db: &DatabaseConnection, name: &str) -> categories::Model {
    categories::ActiveModel {
        name: Set(name.to_owned()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn seed_course(
    db: &DatabaseConnection,
    subject: &str,
    category_id: Option<i32>,
    active: bool,
) -> courses::Model {
    let now = Utc::now();
    courses::ActiveModel {
        subject: Set(subject.to_owned()),
        image: Set(Some("courses/2021/07/cover.png".to_owned())),
        active: Set(active),
        description: Set(None),
        category_id: Set(category_id),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn seed_lesson(
    db: &DatabaseConnection,
    course_id: i32,
    subject: &str,
    active: bool,
) -> lessons::Model {
    let now = Utc::now();
    lessons::ActiveModel {
        subject: Set(subject.to_owned()),
        image: Set(None),
        active: Set(active),
        content: Set(format!("<p>{subject}</p>")),
        course_id: Set(course_id),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}
