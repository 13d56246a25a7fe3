use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use serde::Deserialize;

use ecourse_domain::pagination::PageRequest;

use crate::domain::types::CourseFilter;
use crate::error::CoursesServiceError;
use crate::state::AppState;
use crate::usecase::course::{ListCourseLessonsUseCase, ListCoursesUseCase};
use crate::view::{CourseView, LessonView, PageView};

fn invalid_query(rejection: QueryRejection) -> CoursesServiceError {
    tracing::debug!(error = %rejection, "rejected query string");
    CoursesServiceError::InvalidQuery
}

// ── GET /courses ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ListCoursesQuery {
    pub q: Option<String>,
    pub category_id: Option<i32>,
    pub page: Option<u32>,
    #[serde(rename = "per-page")]
    pub per_page: Option<u32>,
}

impl ListCoursesQuery {
    fn page_request(&self) -> PageRequest {
        let default = PageRequest::default();
        PageRequest {
            per_page: self.per_page.unwrap_or(default.per_page),
            page: self.page.unwrap_or(default.page),
        }
    }
}

pub async fn list_courses(
    State(state): State<AppState>,
    query: Result<Query<ListCoursesQuery>, QueryRejection>,
) -> Result<Json<PageView<CourseView>>, CoursesServiceError> {
    let Query(query) = query.map_err(invalid_query)?;
    let usecase = ListCoursesUseCase {
        repo: state.course_repo(),
    };
    let page = query.page_request();
    let courses = usecase
        .execute(
            CourseFilter {
                text: query.q,
                category_id: query.category_id,
            },
            page,
        )
        .await?;
    let base_url = &state.public_base_url;
    Ok(Json(PageView::from(
        courses.map(|course| CourseView::new(course, base_url)),
    )))
}

// ── GET /courses/{id}/lessons ────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ListLessonsQuery {
    pub q: Option<String>,
}

pub async fn list_course_lessons(
    State(state): State<AppState>,
    Path(course_id): Path<i32>,
    query: Result<Query<ListLessonsQuery>, QueryRejection>,
) -> Result<Json<Vec<LessonView>>, CoursesServiceError> {
    let Query(query) = query.map_err(invalid_query)?;
    let usecase = ListCourseLessonsUseCase {
        courses: state.course_repo(),
        lessons: state.lesson_repo(),
    };
    let lessons = usecase.execute(course_id, query.q).await?;
    Ok(Json(lessons.into_iter().map(LessonView::from).collect()))
}
