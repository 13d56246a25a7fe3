use axum::{
    Router,
    routing::{get, patch, post},
};

use ecourse_core::middleware::{propagate_request_id_layer, request_id_layer, trace_layer};

use crate::handlers::{
    category::list_categories,
    comment::{add_comment, delete_comment, list_comments, update_comment},
    course::{list_course_lessons, list_courses},
    health::{healthz, readyz},
    lesson::{add_tags, get_lesson, rate, react},
    oauth::get_oauth2_info,
    user::create_user,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Catalog
        .route("/categories", get(list_categories))
        .route("/courses", get(list_courses))
        .route("/courses/{id}/lessons", get(list_course_lessons))
        // Lessons
        .route("/lessons/{id}", get(get_lesson))
        .route("/lessons/{id}/tags", post(add_tags))
        .route("/lessons/{id}/comments", get(list_comments))
        .route("/lessons/{id}/add-comment", post(add_comment))
        .route("/lessons/{id}/like", post(react))
        .route("/lessons/{id}/rating", post(rate))
        // Comments
        .route("/comments/{id}", patch(update_comment).delete(delete_comment))
        // Users
        .route("/users", post(create_user))
        .route("/oauth2-info", get(get_oauth2_info))
        .layer(propagate_request_id_layer())
        .layer(trace_layer())
        .layer(request_id_layer())
        .with_state(state)
}
