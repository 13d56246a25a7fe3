#![allow(async_fn_in_trait)]

use ecourse_domain::pagination::{Page, PageRequest};
use ecourse_domain::reaction::ReactionKind;

use crate::domain::types::{
    Category, Comment, CommentWithAuthor, Course, CourseFilter, Lesson, NewUser, Rating,
    Reaction, Tag, User,
};
use crate::error::CoursesServiceError;

/// Repository for course categories.
pub trait CategoryRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Category>, CoursesServiceError>;
}

/// Repository for courses. Only active courses are ever returned.
pub trait CourseRepository: Send + Sync {
    /// Newest first (descending id).
    async fn list_active(
        &self,
        filter: &CourseFilter,
        page: PageRequest,
    ) -> Result<Page<Course>, CoursesServiceError>;

    async fn find_active(&self, id: i32) -> Result<Option<Course>, CoursesServiceError>;
}

/// Repository for lessons and their tags. Only active lessons are ever returned.
pub trait LessonRepository: Send + Sync {
    /// Lessons of `course_id` in ascending id order.
    async fn list_active_of_course(
        &self,
        course_id: i32,
        text: Option<&str>,
    ) -> Result<Vec<Lesson>, CoursesServiceError>;

    async fn find_active(&self, id: i32) -> Result<Option<Lesson>, CoursesServiceError>;

    async fn tags_of(&self, lesson_id: i32) -> Result<Vec<Tag>, CoursesServiceError>;

    /// Look up or create each tag by name and link it to the lesson, touching the
    /// lesson's `updated_at`. Runs in a single transaction; existing links are kept.
    async fn attach_tags(&self, lesson_id: i32, names: &[String])
    -> Result<(), CoursesServiceError>;
}

/// Repository for lesson comments.
pub trait CommentRepository: Send + Sync {
    /// Newest first, each with its author.
    async fn list_of_lesson(
        &self,
        lesson_id: i32,
    ) -> Result<Vec<CommentWithAuthor>, CoursesServiceError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Comment>, CoursesServiceError>;

    async fn create(
        &self,
        lesson_id: i32,
        creator_id: i32,
        content: &str,
    ) -> Result<Comment, CoursesServiceError>;

    async fn update_content(&self, id: i32, content: &str)
    -> Result<Comment, CoursesServiceError>;

    /// Returns `true` if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, CoursesServiceError>;
}

/// Repository for reaction events. Every call appends a row.
pub trait ReactionRepository: Send + Sync {
    async fn create(
        &self,
        lesson_id: i32,
        creator_id: i32,
        kind: ReactionKind,
    ) -> Result<Reaction, CoursesServiceError>;
}

/// Repository for rating events. Every call appends a row.
pub trait RatingRepository: Send + Sync {
    async fn create(
        &self,
        lesson_id: i32,
        creator_id: i32,
        rate: i16,
    ) -> Result<Rating, CoursesServiceError>;
}

/// Repository for user accounts.
pub trait UserRepository: Send + Sync {
    async fn exists_by_username(&self, username: &str) -> Result<bool, CoursesServiceError>;

    /// Fails with `UserAlreadyExists` when the username is taken.
    async fn create(&self, user: &NewUser) -> Result<User, CoursesServiceError>;
}
