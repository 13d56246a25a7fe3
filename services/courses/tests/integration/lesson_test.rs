use axum::http::{HeaderValue, StatusCode, header::AUTHORIZATION};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait, PaginatorTrait};
use serde_json::{Value, json};

use ecourse_courses_schema::{actions, lesson_tags, lessons, ratings, tags};

use crate::helpers::{TestApp, bearer, seed_course, seed_lesson, seed_user, spawn_app};

async fn app_with_lesson() -> (TestApp, i32) {
    let app = spawn_app().await;
    let course = seed_course(&app.db, "Intro to Go", None, true).await;
    let lesson = seed_lesson(&app.db, course.id, "Goroutines", true).await;
    (app, lesson.id)
}

// ── GET /lessons/{id} ────────────────────────────────────────────────────────

#[tokio::test]
async fn should_return_lesson_detail_anonymously() {
    let (app, lesson_id) = app_with_lesson().await;

    let response = app.server.get(&format!("/lessons/{lesson_id}")).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["subject"], "Goroutines");
    assert_eq!(body["content"], "<p>Goroutines</p>");
    assert_eq!(body["tags"], json!([]));
}

#[tokio::test]
async fn should_return_404_for_inactive_lesson() {
    let app = spawn_app().await;
    let course = seed_course(&app.db, "Intro to Go", None, true).await;
    let draft = seed_lesson(&app.db, course.id, "Draft", false).await;

    let response = app.server.get(&format!("/lessons/{}", draft.id)).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["kind"], "LESSON_NOT_FOUND");
}

#[tokio::test]
async fn should_reject_invalid_token_on_open_lesson_endpoint() {
    let (app, lesson_id) = app_with_lesson().await;

    let response = app
        .server
        .get(&format!("/lessons/{lesson_id}"))
        .add_header(AUTHORIZATION, HeaderValue::from_static("Bearer not-a-token"))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

// ── POST /lessons/{id}/tags ──────────────────────────────────────────────────

#[tokio::test]
async fn should_attach_tags_without_duplicating_rows() {
    let (app, lesson_id) = app_with_lesson().await;
    let path = format!("/lessons/{lesson_id}/tags");

    let response = app
        .server
        .post(&path)
        .json(&json!({ "tags": ["go", "web"] }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    let names: Vec<&str> = body["tags"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["go", "web"]);

    let response = app
        .server
        .post(&path)
        .json(&json!({ "tags": ["go", " web ", "go"] }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    assert_eq!(tags::Entity::find().count(&app.db).await.unwrap(), 2);
    assert_eq!(lesson_tags::Entity::find().count(&app.db).await.unwrap(), 2);
}

#[tokio::test]
async fn should_reuse_tag_that_already_exists() {
    let (app, lesson_id) = app_with_lesson().await;
    let existing = tags::ActiveModel {
        name: Set("go".to_owned()),
        ..Default::default()
    }
    .insert(&app.db)
    .await
    .unwrap();

    let response = app
        .server
        .post(&format!("/lessons/{lesson_id}/tags"))
        .json(&json!({ "tags": ["go", "web"] }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["tags"][0]["id"], existing.id);
    assert_eq!(body["tags"][0]["name"], "go");
    assert_eq!(tags::Entity::find().count(&app.db).await.unwrap(), 2);
    assert_eq!(lesson_tags::Entity::find().count(&app.db).await.unwrap(), 2);
}

#[tokio::test]
async fn should_bump_lesson_updated_at_when_tagging() {
    let (app, lesson_id) = app_with_lesson().await;
    let before = lessons::Entity::find_by_id(lesson_id)
        .one(&app.db)
        .await
        .unwrap()
        .unwrap()
        .updated_at;

    app.server
        .post(&format!("/lessons/{lesson_id}/tags"))
        .json(&json!({ "tags": ["go"] }))
        .await;

    let after = lessons::Entity::find_by_id(lesson_id)
        .one(&app.db)
        .await
        .unwrap()
        .unwrap()
        .updated_at;
    assert!(after >= before);
}

#[tokio::test]
async fn should_reject_missing_or_blank_tags() {
    let (app, lesson_id) = app_with_lesson().await;
    let path = format!("/lessons/{lesson_id}/tags");

    let missing = app.server.post(&path).json(&json!({})).await;
    assert_eq!(missing.status_code(), StatusCode::BAD_REQUEST);

    let blank = app
        .server
        .post(&path)
        .json(&json!({ "tags": ["go", "  "] }))
        .await;
    assert_eq!(blank.status_code(), StatusCode::BAD_REQUEST);

    assert_eq!(tags::Entity::find().count(&app.db).await.unwrap(), 0);
}

#[tokio::test]
async fn should_return_404_when_tagging_unknown_lesson() {
    let app = spawn_app().await;
    let response = app
        .server
        .post("/lessons/999/tags")
        .json(&json!({ "tags": ["go"] }))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

// ── POST /lessons/{id}/like ──────────────────────────────────────────────────

#[tokio::test]
async fn should_record_reaction_for_authenticated_user() {
    let (app, lesson_id) = app_with_lesson().await;
    let user = seed_user(&app.db, "ada").await;
    let (name, value) = bearer(user.id);

    let response = app
        .server
        .post(&format!("/lessons/{lesson_id}/like"))
        .add_header(name, value)
        .json(&json!({ "type": "2" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["type"], 2);
    assert!(body["created_date"].is_string());

    let rows = actions::Entity::find().all(&app.db).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].creator_id, user.id);
}

#[tokio::test]
async fn should_reject_non_numeric_reaction_and_create_nothing() {
    let (app, lesson_id) = app_with_lesson().await;
    let user = seed_user(&app.db, "ada").await;
    let (name, value) = bearer(user.id);

    let response = app
        .server
        .post(&format!("/lessons/{lesson_id}/like"))
        .add_header(name, value)
        .json(&json!({ "type": "abc" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["kind"], "INVALID_REACTION");
    assert_eq!(actions::Entity::find().count(&app.db).await.unwrap(), 0);
}

#[tokio::test]
async fn should_require_authentication_to_react() {
    let (app, lesson_id) = app_with_lesson().await;

    let response = app
        .server
        .post(&format!("/lessons/{lesson_id}/like"))
        .json(&json!({ "type": 0 }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(actions::Entity::find().count(&app.db).await.unwrap(), 0);
}

// ── POST /lessons/{id}/rating ────────────────────────────────────────────────

#[tokio::test]
async fn should_record_rating_for_authenticated_user() {
    let (app, lesson_id) = app_with_lesson().await;
    let user = seed_user(&app.db, "ada").await;
    let (name, value) = bearer(user.id);

    let response = app
        .server
        .post(&format!("/lessons/{lesson_id}/rating"))
        .add_header(name, value)
        .json(&json!({ "rating": 5 }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["rate"], 5);
    assert_eq!(ratings::Entity::find().count(&app.db).await.unwrap(), 1);
}

#[tokio::test]
async fn should_reject_missing_rating() {
    let (app, lesson_id) = app_with_lesson().await;
    let user = seed_user(&app.db, "ada").await;
    let (name, value) = bearer(user.id);

    let response = app
        .server
        .post(&format!("/lessons/{lesson_id}/rating"))
        .add_header(name, value)
        .json(&json!({}))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(ratings::Entity::find().count(&app.db).await.unwrap(), 0);
}

#[tokio::test]
async fn should_reject_non_numeric_or_out_of_range_rating() {
    let (app, lesson_id) = app_with_lesson().await;
    let user = seed_user(&app.db, "ada").await;

    for rating in [json!("abc"), json!(40000), json!(-40000)] {
        let (name, value) = bearer(user.id);
        let response = app
            .server
            .post(&format!("/lessons/{lesson_id}/rating"))
            .add_header(name, value)
            .json(&json!({ "rating": rating }))
            .await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "{rating}");
        let body: Value = response.json();
        assert_eq!(body["kind"], "INVALID_RATING");
    }
    assert_eq!(ratings::Entity::find().count(&app.db).await.unwrap(), 0);
}

#[tokio::test]
async fn should_reject_malformed_body_with_error_envelope() {
    let (app, lesson_id) = app_with_lesson().await;
    let user = seed_user(&app.db, "ada").await;
    let (name, value) = bearer(user.id);

    let response = app
        .server
        .post(&format!("/lessons/{lesson_id}/rating"))
        .add_header(name, value)
        .text("{not json")
        .content_type("application/json")
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["kind"], "MISSING_DATA");
}

#[tokio::test]
async fn should_require_authentication_to_rate() {
    let (app, lesson_id) = app_with_lesson().await;

    let response = app
        .server
        .post(&format!("/lessons/{lesson_id}/rating"))
        .json(&json!({ "rating": 5 }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}
