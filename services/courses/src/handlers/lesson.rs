use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use ecourse_auth_types::identity::Identity;

use crate::domain::policy::LessonAction;
use crate::error::CoursesServiceError;
use crate::handlers::{JsonBody, caller, int_field, string_list_field};
use crate::state::AppState;
use crate::usecase::lesson::{
    AttachTagsUseCase, GetLessonUseCase, RateLessonUseCase, ReactToLessonUseCase,
};
use crate::view::{LessonDetailView, RatingView, ReactionView};

// ── GET /lessons/{id} ────────────────────────────────────────────────────────

pub async fn get_lesson(
    identity: Option<Identity>,
    State(state): State<AppState>,
    Path(lesson_id): Path<i32>,
) -> Result<Json<LessonDetailView>, CoursesServiceError> {
    LessonAction::Retrieve.authorize(caller(identity))?;
    let usecase = GetLessonUseCase {
        repo: state.lesson_repo(),
    };
    let detail = usecase.execute(lesson_id).await?;
    Ok(Json(LessonDetailView::from(detail)))
}

// ── POST /lessons/{id}/tags ──────────────────────────────────────────────────

pub async fn add_tags(
    identity: Option<Identity>,
    State(state): State<AppState>,
    Path(lesson_id): Path<i32>,
    JsonBody(body): JsonBody,
) -> Result<(StatusCode, Json<LessonDetailView>), CoursesServiceError> {
    LessonAction::AddTags.authorize(caller(identity))?;
    let usecase = AttachTagsUseCase {
        repo: state.lesson_repo(),
    };
    let detail = usecase
        .execute(lesson_id, string_list_field(&body, "tags"))
        .await?;
    Ok((StatusCode::CREATED, Json(LessonDetailView::from(detail))))
}

// ── POST /lessons/{id}/like ──────────────────────────────────────────────────

pub async fn react(
    identity: Option<Identity>,
    State(state): State<AppState>,
    Path(lesson_id): Path<i32>,
    JsonBody(body): JsonBody,
) -> Result<Json<ReactionView>, CoursesServiceError> {
    let user_id = LessonAction::React.acting_user(caller(identity))?;
    let usecase = ReactToLessonUseCase {
        lessons: state.lesson_repo(),
        reactions: state.reaction_repo(),
    };
    let reaction = usecase
        .execute(lesson_id, user_id, int_field(&body, "type"))
        .await?;
    Ok(Json(ReactionView::from(reaction)))
}

// ── POST /lessons/{id}/rating ────────────────────────────────────────────────

pub async fn rate(
    identity: Option<Identity>,
    State(state): State<AppState>,
    Path(lesson_id): Path<i32>,
    JsonBody(body): JsonBody,
) -> Result<Json<RatingView>, CoursesServiceError> {
    let user_id = LessonAction::Rate.acting_user(caller(identity))?;
    let usecase = RateLessonUseCase {
        lessons: state.lesson_repo(),
        ratings: state.rating_repo(),
    };
    let rating = usecase
        .execute(lesson_id, user_id, int_field(&body, "rating"))
        .await?;
    Ok(Json(RatingView::from(rating)))
}
