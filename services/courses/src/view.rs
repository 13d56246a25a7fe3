//! JSON view models. Mapping is pure; the public base URL is passed in.

use chrono::{DateTime, Utc};
use serde::Serialize;

use ecourse_core::serde::to_rfc3339_ms;
use ecourse_domain::media::absolute_image_url;
use ecourse_domain::pagination::Page;

use crate::domain::types::{
    Category, Comment, CommentWithAuthor, Course, Lesson, LessonDetail, Rating, Reaction, Tag,
    User,
};

#[derive(Debug, Serialize)]
pub struct CategoryView {
    pub id: i32,
    pub name: String,
}

impl From<Category> for CategoryView {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CourseView {
    pub id: i32,
    pub subject: String,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub created_date: DateTime<Utc>,
    pub image: Option<String>,
    pub category: Option<i32>,
}

impl CourseView {
    pub fn new(course: Course, base_url: &str) -> Self {
        Self {
            image: course
                .image
                .as_deref()
                .and_then(|path| absolute_image_url(path, base_url)),
            id: course.id,
            subject: course.subject,
            created_date: course.created_at,
            category: course.category_id,
        }
    }
}

/// Lesson without body or tags, as listed under a course.
#[derive(Debug, Serialize)]
pub struct LessonView {
    pub id: i32,
    pub subject: String,
    pub image: Option<String>,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub created_date: DateTime<Utc>,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub updated_date: DateTime<Utc>,
    pub course: i32,
}

impl From<Lesson> for LessonView {
    fn from(lesson: Lesson) -> Self {
        Self {
            id: lesson.id,
            subject: lesson.subject,
            image: lesson.image,
            created_date: lesson.created_at,
            updated_date: lesson.updated_at,
            course: lesson.course_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TagView {
    pub id: i32,
    pub name: String,
}

impl From<Tag> for TagView {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id,
            name: tag.name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LessonDetailView {
    #[serde(flatten)]
    pub summary: LessonView,
    pub content: String,
    pub tags: Vec<TagView>,
}

impl From<LessonDetail> for LessonDetailView {
    fn from(detail: LessonDetail) -> Self {
        let content = detail.lesson.content.clone();
        Self {
            summary: LessonView::from(detail.lesson),
            content,
            tags: detail.tags.into_iter().map(TagView::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserView {
    pub id: i32,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub date_joined: DateTime<Utc>,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            date_joined: user.date_joined,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CommentView {
    pub id: i32,
    pub content: String,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub created_date: DateTime<Utc>,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub updated_date: DateTime<Utc>,
}

impl From<Comment> for CommentView {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            content: comment.content,
            created_date: comment.created_at,
            updated_date: comment.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CommentWithUserView {
    #[serde(flatten)]
    pub comment: CommentView,
    pub user: UserView,
}

impl From<CommentWithAuthor> for CommentWithUserView {
    fn from(row: CommentWithAuthor) -> Self {
        Self {
            comment: CommentView::from(row.comment),
            user: UserView::from(row.author),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReactionView {
    pub id: i32,
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub created_date: DateTime<Utc>,
}

impl From<Reaction> for ReactionView {
    fn from(reaction: Reaction) -> Self {
        Self {
            id: reaction.id,
            kind: reaction.kind.as_u8(),
            created_date: reaction.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RatingView {
    pub id: i32,
    pub rate: i16,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub created_date: DateTime<Utc>,
}

impl From<Rating> for RatingView {
    fn from(rating: Rating) -> Self {
        Self {
            id: rating.id,
            rate: rating.rate,
            created_date: rating.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PageView<T> {
    pub count: u64,
    pub page: u32,
    pub per_page: u32,
    pub results: Vec<T>,
}

impl<T> From<Page<T>> for PageView<T> {
    fn from(page: Page<T>) -> Self {
        Self {
            count: page.total,
            page: page.request.page,
            per_page: page.request.per_page,
            results: page.items,
        }
    }
}
