use crate::domain::policy::ensure_comment_owner;
use crate::domain::repository::{CommentRepository, LessonRepository};
use crate::domain::types::{Comment, CommentWithAuthor};
use crate::error::CoursesServiceError;
use crate::usecase::non_blank;

// ── ListLessonComments ───────────────────────────────────────────────────────

pub struct ListLessonCommentsUseCase<L: LessonRepository, C: CommentRepository> {
    pub lessons: L,
    pub comments: C,
}

impl<L: LessonRepository, C: CommentRepository> ListLessonCommentsUseCase<L, C> {
    pub async fn execute(
        &self,
        lesson_id: i32,
    ) -> Result<Vec<CommentWithAuthor>, CoursesServiceError> {
        self.lessons
            .find_active(lesson_id)
            .await?
            .ok_or(CoursesServiceError::LessonNotFound)?;
        self.comments.list_of_lesson(lesson_id).await
    }
}

// ── AddComment ───────────────────────────────────────────────────────────────

pub struct AddCommentUseCase<L: LessonRepository, C: CommentRepository> {
    pub lessons: L,
    pub comments: C,
}

impl<L: LessonRepository, C: CommentRepository> AddCommentUseCase<L, C> {
    pub async fn execute(
        &self,
        lesson_id: i32,
        user_id: i32,
        content: Option<String>,
    ) -> Result<Comment, CoursesServiceError> {
        let content = non_blank(content).ok_or(CoursesServiceError::MissingData)?;
        self.lessons
            .find_active(lesson_id)
            .await?
            .ok_or(CoursesServiceError::LessonNotFound)?;
        self.comments.create(lesson_id, user_id, &content).await
    }
}

// ── UpdateComment ────────────────────────────────────────────────────────────

pub struct UpdateCommentUseCase<C: CommentRepository> {
    pub repo: C,
}

impl<C: CommentRepository> UpdateCommentUseCase<C> {
    pub async fn execute(
        &self,
        comment_id: i32,
        user_id: i32,
        content: Option<String>,
    ) -> Result<Comment, CoursesServiceError> {
        let comment = self
            .repo
            .find_by_id(comment_id)
            .await?
            .ok_or(CoursesServiceError::CommentNotFound)?;
        ensure_comment_owner(&comment, user_id)?;
        let content = non_blank(content).ok_or(CoursesServiceError::MissingData)?;
        self.repo.update_content(comment_id, &content).await
    }
}

// ── DeleteComment ────────────────────────────────────────────────────────────

pub struct DeleteCommentUseCase<C: CommentRepository> {
    pub repo: C,
}

impl<C: CommentRepository> DeleteCommentUseCase<C> {
    pub async fn execute(&self, comment_id: i32, user_id: i32) -> Result<(), CoursesServiceError> {
        let comment = self
            .repo
            .find_by_id(comment_id)
            .await?
            .ok_or(CoursesServiceError::CommentNotFound)?;
        ensure_comment_owner(&comment, user_id)?;
        if !self.repo.delete(comment_id).await? {
            return Err(CoursesServiceError::CommentNotFound);
        }
        Ok(())
    }
}
