use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Courses service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum CoursesServiceError {
    #[error("course not found")]
    CourseNotFound,
    #[error("lesson not found")]
    LessonNotFound,
    #[error("comment not found")]
    CommentNotFound,
    #[error("user already exists")]
    UserAlreadyExists,
    #[error("missing data")]
    MissingData,
    #[error("invalid reaction")]
    InvalidReaction,
    #[error("invalid rating")]
    InvalidRating,
    #[error("invalid query")]
    InvalidQuery,
    #[error("unauthorized")]
    Unauthorized,
    #[error("forbidden")]
    Forbidden,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl CoursesServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CourseNotFound => "COURSE_NOT_FOUND",
            Self::LessonNotFound => "LESSON_NOT_FOUND",
            Self::CommentNotFound => "COMMENT_NOT_FOUND",
            Self::UserAlreadyExists => "USER_ALREADY_EXISTS",
            Self::MissingData => "MISSING_DATA",
            Self::InvalidReaction => "INVALID_REACTION",
            Self::InvalidRating => "INVALID_RATING",
            Self::InvalidQuery => "INVALID_QUERY",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for CoursesServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::CourseNotFound | Self::LessonNotFound | Self::CommentNotFound => {
                StatusCode::NOT_FOUND
            }
            Self::UserAlreadyExists => StatusCode::CONFLICT,
            Self::MissingData
            | Self::InvalidReaction
            | Self::InvalidRating
            | Self::InvalidQuery => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
