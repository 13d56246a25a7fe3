use chrono::{DateTime, Utc};
use serde::Serialize;

use ecourse_domain::reaction::ReactionKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

/// A published course. `image` is the stored relative path.
#[derive(Debug, Clone)]
pub struct Course {
    pub id: i32,
    pub subject: String,
    pub image: Option<String>,
    pub category_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Filters for the course listing. Blank text is treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseFilter {
    pub text: Option<String>,
    pub category_id: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct Lesson {
    pub id: i32,
    pub subject: String,
    pub image: Option<String>,
    pub content: String,
    pub course_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: i32,
    pub name: String,
}

/// A lesson together with its tags ordered by id.
#[derive(Debug, Clone)]
pub struct LessonDetail {
    pub lesson: Lesson,
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: i32,
    pub content: String,
    pub lesson_id: i32,
    pub creator_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    pub fn is_owned_by(&self, user_id: i32) -> bool {
        self.creator_id == user_id
    }
}

/// Public profile of a user. Credentials never leave the repository layer.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_joined: DateTime<Utc>,
}

/// Account to be inserted. `password_hash` is an argon2 PHC string.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone)]
pub struct CommentWithAuthor {
    pub comment: Comment,
    pub author: User,
}

#[derive(Debug, Clone)]
pub struct Reaction {
    pub id: i32,
    pub kind: ReactionKind,
    pub lesson_id: i32,
    pub creator_id: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Rating {
    pub id: i32,
    pub rate: i16,
    pub lesson_id: i32,
    pub creator_id: i32,
    pub created_at: DateTime<Utc>,
}

/// OAuth2 client registration handed to front-end clients.
#[derive(Debug, Clone, Serialize)]
pub struct OAuth2Info {
    pub client_id: String,
    pub client_secret: String,
}
