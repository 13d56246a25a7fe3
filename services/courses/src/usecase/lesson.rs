use ecourse_domain::reaction::ReactionKind;

use crate::domain::repository::{LessonRepository, RatingRepository, ReactionRepository};
use crate::domain::types::{Lesson, LessonDetail, Rating, Reaction};
use crate::error::CoursesServiceError;

async fn require_lesson<L: LessonRepository>(
    lessons: &L,
    lesson_id: i32,
) -> Result<Lesson, CoursesServiceError> {
    lessons
        .find_active(lesson_id)
        .await?
        .ok_or(CoursesServiceError::LessonNotFound)
}

// ── GetLesson ────────────────────────────────────────────────────────────────

pub struct GetLessonUseCase<L: LessonRepository> {
    pub repo: L,
}

impl<L: LessonRepository> GetLessonUseCase<L> {
    pub async fn execute(&self, lesson_id: i32) -> Result<LessonDetail, CoursesServiceError> {
        let lesson = require_lesson(&self.repo, lesson_id).await?;
        let tags = self.repo.tags_of(lesson_id).await?;
        Ok(LessonDetail { lesson, tags })
    }
}

// ── AttachTags ───────────────────────────────────────────────────────────────

/// Trim names and collapse duplicates, keeping first-seen order.
///
/// Fails with `MissingData` when the list is absent, empty, or contains a blank name.
pub fn normalize_tag_names(names: Option<Vec<String>>) -> Result<Vec<String>, CoursesServiceError> {
    let names = names.ok_or(CoursesServiceError::MissingData)?;
    let mut normalized: Vec<String> = Vec::with_capacity(names.len());
    for name in names {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoursesServiceError::MissingData);
        }
        if !normalized.iter().any(|n| n == name) {
            normalized.push(name.to_owned());
        }
    }
    if normalized.is_empty() {
        return Err(CoursesServiceError::MissingData);
    }
    Ok(normalized)
}

pub struct AttachTagsUseCase<L: LessonRepository> {
    pub repo: L,
}

impl<L: LessonRepository> AttachTagsUseCase<L> {
    pub async fn execute(
        &self,
        lesson_id: i32,
        names: Option<Vec<String>>,
    ) -> Result<LessonDetail, CoursesServiceError> {
        require_lesson(&self.repo, lesson_id).await?;
        let names = normalize_tag_names(names)?;
        self.repo.attach_tags(lesson_id, &names).await?;

        // Re-read so the response carries the bumped `updated_at`.
        let lesson = require_lesson(&self.repo, lesson_id).await?;
        let tags = self.repo.tags_of(lesson_id).await?;
        Ok(LessonDetail { lesson, tags })
    }
}

// ── ReactToLesson ────────────────────────────────────────────────────────────

pub struct ReactToLessonUseCase<L: LessonRepository, R: ReactionRepository> {
    pub lessons: L,
    pub reactions: R,
}

impl<L: LessonRepository, R: ReactionRepository> ReactToLessonUseCase<L, R> {
    /// `kind` is the parsed wire value, `None` when absent or not an integer.
    pub async fn execute(
        &self,
        lesson_id: i32,
        user_id: i32,
        kind: Option<i64>,
    ) -> Result<Reaction, CoursesServiceError> {
        let kind = kind
            .and_then(ReactionKind::from_wire)
            .ok_or(CoursesServiceError::InvalidReaction)?;
        require_lesson(&self.lessons, lesson_id).await?;
        self.reactions.create(lesson_id, user_id, kind).await
    }
}

// ── RateLesson ───────────────────────────────────────────────────────────────

pub struct RateLessonUseCase<L: LessonRepository, R: RatingRepository> {
    pub lessons: L,
    pub ratings: R,
}

impl<L: LessonRepository, R: RatingRepository> RateLessonUseCase<L, R> {
    pub async fn execute(
        &self,
        lesson_id: i32,
        user_id: i32,
        rate: Option<i64>,
    ) -> Result<Rating, CoursesServiceError> {
        let rate = rate
            .and_then(|r| i16::try_from(r).ok())
            .ok_or(CoursesServiceError::InvalidRating)?;
        require_lesson(&self.lessons, lesson_id).await?;
        self.ratings.create(lesson_id, user_id, rate).await
    }
}
