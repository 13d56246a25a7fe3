use axum::{Json, extract::State, http::StatusCode};
use crate::error::CoursesServiceError;
use crate::handlers::{JsonBody, string_field};
use crate::state::AppState;
use crate::usecase::user::{CreateUserInput, CreateUserUseCase};
use crate::view::UserView;

// ── POST /users ──────────────────────────────────────────────────────────────

pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<(StatusCode, Json<UserView>), CoursesServiceError> {
    let usecase = CreateUserUseCase {
        repo: state.user_repo(),
    };
    let user = usecase
        .execute(CreateUserInput {
            username: string_field(&body, "username")?,
            password: string_field(&body, "password")?,
            email: string_field(&body, "email")?,
            first_name: string_field(&body, "first_name")?,
            last_name: string_field(&body, "last_name")?,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(UserView::from(user))))
}
