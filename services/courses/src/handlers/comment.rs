use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use ecourse_auth_types::identity::Identity;

use crate::domain::policy::LessonAction;
use crate::error::CoursesServiceError;
use crate::handlers::{JsonBody, caller, string_field};
use crate::state::AppState;
use crate::usecase::comment::{
    AddCommentUseCase, DeleteCommentUseCase, ListLessonCommentsUseCase, UpdateCommentUseCase,
};
use crate::view::{CommentView, CommentWithUserView};

// ── GET /lessons/{id}/comments ───────────────────────────────────────────────

pub async fn list_comments(
    identity: Option<Identity>,
    State(state): State<AppState>,
    Path(lesson_id): Path<i32>,
) -> Result<Json<Vec<CommentWithUserView>>, CoursesServiceError> {
    LessonAction::ListComments.authorize(caller(identity))?;
    let usecase = ListLessonCommentsUseCase {
        lessons: state.lesson_repo(),
        comments: state.comment_repo(),
    };
    let comments = usecase.execute(lesson_id).await?;
    Ok(Json(
        comments.into_iter().map(CommentWithUserView::from).collect(),
    ))
}

// ── POST /lessons/{id}/add-comment ───────────────────────────────────────────

pub async fn add_comment(
    identity: Option<Identity>,
    State(state): State<AppState>,
    Path(lesson_id): Path<i32>,
    JsonBody(body): JsonBody,
) -> Result<(StatusCode, Json<CommentView>), CoursesServiceError> {
    let user_id = LessonAction::AddComment.acting_user(caller(identity))?;
    let usecase = AddCommentUseCase {
        lessons: state.lesson_repo(),
        comments: state.comment_repo(),
    };
    let content = string_field(&body, "content")?;
    let comment = usecase.execute(lesson_id, user_id, content).await?;
    Ok((StatusCode::CREATED, Json(CommentView::from(comment))))
}

// ── PATCH /comments/{id} ─────────────────────────────────────────────────────

pub async fn update_comment(
    identity: Option<Identity>,
    State(state): State<AppState>,
    Path(comment_id): Path<i32>,
    JsonBody(body): JsonBody,
) -> Result<Json<CommentView>, CoursesServiceError> {
    let user_id = caller(identity).ok_or(CoursesServiceError::Unauthorized)?;
    let usecase = UpdateCommentUseCase {
        repo: state.comment_repo(),
    };
    let content = string_field(&body, "content")?;
    let comment = usecase.execute(comment_id, user_id, content).await?;
    Ok(Json(CommentView::from(comment)))
}

// ── DELETE /comments/{id} ────────────────────────────────────────────────────

pub async fn delete_comment(
    identity: Option<Identity>,
    State(state): State<AppState>,
    Path(comment_id): Path<i32>,
) -> Result<StatusCode, CoursesServiceError> {
    let user_id = caller(identity).ok_or(CoursesServiceError::Unauthorized)?;
    let usecase = DeleteCommentUseCase {
        repo: state.comment_repo(),
    };
    usecase.execute(comment_id, user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
