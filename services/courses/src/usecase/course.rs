use ecourse_domain::pagination::{Page, PageRequest};

use crate::domain::repository::{CourseRepository, LessonRepository};
use crate::domain::types::{Course, CourseFilter, Lesson};
use crate::error::CoursesServiceError;
use crate::usecase::non_blank;

// ── ListCourses ──────────────────────────────────────────────────────────────

pub struct ListCoursesUseCase<R: CourseRepository> {
    pub repo: R,
}

impl<R: CourseRepository> ListCoursesUseCase<R> {
    pub async fn execute(
        &self,
        filter: CourseFilter,
        page: PageRequest,
    ) -> Result<Page<Course>, CoursesServiceError> {
        let filter = CourseFilter {
            text: non_blank(filter.text),
            category_id: filter.category_id,
        };
        self.repo.list_active(&filter, page.clamped()).await
    }
}

// ── ListCourseLessons ────────────────────────────────────────────────────────

pub struct ListCourseLessonsUseCase<C: CourseRepository, L: LessonRepository> {
    pub courses: C,
    pub lessons: L,
}

impl<C: CourseRepository, L: LessonRepository> ListCourseLessonsUseCase<C, L> {
    pub async fn execute(
        &self,
        course_id: i32,
        text: Option<String>,
    ) -> Result<Vec<Lesson>, CoursesServiceError> {
        self.courses
            .find_active(course_id)
            .await?
            .ok_or(CoursesServiceError::CourseNotFound)?;
        let text = non_blank(text);
        self.lessons
            .list_active_of_course(course_id, text.as_deref())
            .await
    }
}
