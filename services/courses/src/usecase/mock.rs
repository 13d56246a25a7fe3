//! In-memory repositories shared by use case tests.

use std::sync::{Arc, Mutex};

use chrono::Utc;

use ecourse_domain::pagination::{Page, PageRequest};
use ecourse_domain::reaction::ReactionKind;

use crate::domain::repository::{
    CategoryRepository, CommentRepository, CourseRepository, LessonRepository,
    RatingRepository, ReactionRepository, UserRepository,
};
use crate::domain::types::{
    Category, Comment, CommentWithAuthor, Course, CourseFilter, Lesson, NewUser, Rating,
    Reaction, Tag, User,
};
use crate::error::CoursesServiceError;

#[derive(Default)]
pub struct Inner {
    pub categories: Vec<Category>,
    pub courses: Vec<Course>,
    pub lessons: Vec<Lesson>,
    pub tags: Vec<Tag>,
    pub lesson_tags: Vec<(i32, i32)>,
    pub comments: Vec<Comment>,
    pub reactions: Vec<Reaction>,
    pub ratings: Vec<Rating>,
    pub users: Vec<(User, String)>,
}

/// Cloneable handle; clones share the same rows.
#[derive(Clone, Default)]
pub struct MockStore {
    pub inner: Arc<Mutex<Inner>>,
}

impl MockStore {
    pub fn with(f: impl FnOnce(&mut Inner)) -> Self {
        let store = Self::default();
        f(&mut store.inner.lock().unwrap());
        store
    }

    pub fn read<T>(&self, f: impl FnOnce(&Inner) -> T) -> T {
        f(&self.inner.lock().unwrap())
    }
}

pub fn course(id: i32, subject: &str) -> Course {
    Course {
        id,
        subject: subject.into(),
        image: None,
        category_id: None,
        created_at: Utc::now(),
    }
}

pub fn lesson(id: i32, course_id: i32) -> Lesson {
    Lesson {
        id,
        subject: format!("lesson {id}"),
        image: None,
        content: "<p>body</p>".into(),
        course_id,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn comment(id: i32, lesson_id: i32, creator_id: i32) -> Comment {
    Comment {
        id,
        content: "first".into(),
        lesson_id,
        creator_id,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn user(id: i32, username: &str) -> User {
    User {
        id,
        username: username.into(),
        first_name: String::new(),
        last_name: String::new(),
        email: format!("{username}@example.com"),
        date_joined: Utc::now(),
    }
}

impl CategoryRepository for MockStore {
    async fn list_all(&self) -> Result<Vec<Category>, CoursesServiceError> {
        Ok(self.read(|s| s.categories.clone()))
    }
}

impl CourseRepository for MockStore {
    async fn list_active(
        &self,
        filter: &CourseFilter,
        page: PageRequest,
    ) -> Result<Page<Course>, CoursesServiceError> {
        let mut items: Vec<Course> = self.read(|s| {
            s.courses
                .iter()
                .filter(|c| {
                    filter.text.as_deref().is_none_or(|t| {
                        c.subject.to_lowercase().contains(&t.to_lowercase())
                    })
                })
                .filter(|c| filter.category_id.is_none_or(|id| c.category_id == Some(id)))
                .cloned()
                .collect()
        });
        items.sort_by(|a, b| b.id.cmp(&a.id));
        let total = items.len() as u64;
        let items = items
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.per_page as usize)
            .collect();
        Ok(Page {
            items,
            total,
            request: page,
        })
    }

    async fn find_active(&self, id: i32) -> Result<Option<Course>, CoursesServiceError> {
        Ok(self.read(|s| s.courses.iter().find(|c| c.id == id).cloned()))
    }
}

impl LessonRepository for MockStore {
    async fn list_active_of_course(
        &self,
        course_id: i32,
        _text: Option<&str>,
    ) -> Result<Vec<Lesson>, CoursesServiceError> {
        Ok(self.read(|s| {
            s.lessons
                .iter()
                .filter(|l| l.course_id == course_id)
                .cloned()
                .collect()
        }))
    }

    async fn find_active(&self, id: i32) -> Result<Option<Lesson>, CoursesServiceError> {
        Ok(self.read(|s| s.lessons.iter().find(|l| l.id == id).cloned()))
    }

    async fn tags_of(&self, lesson_id: i32) -> Result<Vec<Tag>, CoursesServiceError> {
        Ok(self.read(|s| {
            s.tags
                .iter()
                .filter(|t| s.lesson_tags.contains(&(lesson_id, t.id)))
                .cloned()
                .collect()
        }))
    }

    async fn attach_tags(
        &self,
        lesson_id: i32,
        names: &[String],
    ) -> Result<(), CoursesServiceError> {
        let mut s = self.inner.lock().unwrap();
        for name in names {
            let tag_id = match s.tags.iter().find(|t| &t.name == name) {
                Some(tag) => tag.id,
                None => {
                    let id = s.tags.len() as i32 + 1;
                    s.tags.push(Tag {
                        id,
                        name: name.clone(),
                    });
                    id
                }
            };
            if !s.lesson_tags.contains(&(lesson_id, tag_id)) {
                s.lesson_tags.push((lesson_id, tag_id));
            }
        }
        Ok(())
    }
}

impl CommentRepository for MockStore {
    async fn list_of_lesson(
        &self,
        lesson_id: i32,
    ) -> Result<Vec<CommentWithAuthor>, CoursesServiceError> {
        Ok(self.read(|s| {
            s.comments
                .iter()
                .rev()
                .filter(|c| c.lesson_id == lesson_id)
                .filter_map(|c| {
                    let (author, _) = s.users.iter().find(|(u, _)| u.id == c.creator_id)?;
                    Some(CommentWithAuthor {
                        comment: c.clone(),
                        author: author.clone(),
                    })
                })
                .collect()
        }))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Comment>, CoursesServiceError> {
        Ok(self.read(|s| s.comments.iter().find(|c| c.id == id).cloned()))
    }

    async fn create(
        &self,
        lesson_id: i32,
        creator_id: i32,
        content: &str,
    ) -> Result<Comment, CoursesServiceError> {
        let mut s = self.inner.lock().unwrap();
        let created = comment(s.comments.len() as i32 + 1, lesson_id, creator_id);
        let created = Comment {
            content: content.to_owned(),
            ..created
        };
        s.comments.push(created.clone());
        Ok(created)
    }

    async fn update_content(
        &self,
        id: i32,
        content: &str,
    ) -> Result<Comment, CoursesServiceError> {
        let mut s = self.inner.lock().unwrap();
        let c = s
            .comments
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(CoursesServiceError::CommentNotFound)?;
        c.content = content.to_owned();
        c.updated_at = Utc::now();
        Ok(c.clone())
    }

    async fn delete(&self, id: i32) -> Result<bool, CoursesServiceError> {
        let mut s = self.inner.lock().unwrap();
        let before = s.comments.len();
        s.comments.retain(|c| c.id != id);
        Ok(s.comments.len() < before)
    }
}

impl ReactionRepository for MockStore {
    async fn create(
        &self,
        lesson_id: i32,
        creator_id: i32,
        kind: ReactionKind,
    ) -> Result<Reaction, CoursesServiceError> {
        let mut s = self.inner.lock().unwrap();
        let reaction = Reaction {
            id: s.reactions.len() as i32 + 1,
            kind,
            lesson_id,
            creator_id,
            created_at: Utc::now(),
        };
        s.reactions.push(reaction.clone());
        Ok(reaction)
    }
}

impl RatingRepository for MockStore {
    async fn create(
        &self,
        lesson_id: i32,
        creator_id: i32,
        rate: i16,
    ) -> Result<Rating, CoursesServiceError> {
        let mut s = self.inner.lock().unwrap();
        let rating = Rating {
            id: s.ratings.len() as i32 + 1,
            rate,
            lesson_id,
            creator_id,
            created_at: Utc::now(),
        };
        s.ratings.push(rating.clone());
        Ok(rating)
    }
}

impl UserRepository for MockStore {
    async fn exists_by_username(&self, username: &str) -> Result<bool, CoursesServiceError> {
        Ok(self.read(|s| s.users.iter().any(|(u, _)| u.username == username)))
    }

    async fn create(&self, new_user: &NewUser) -> Result<User, CoursesServiceError> {
        let mut s = self.inner.lock().unwrap();
        if s.users.iter().any(|(u, _)| u.username == new_user.username) {
            return Err(CoursesServiceError::UserAlreadyExists);
        }
        let created = User {
            id: s.users.len() as i32 + 1,
            username: new_user.username.clone(),
            first_name: new_user.first_name.clone(),
            last_name: new_user.last_name.clone(),
            email: new_user.email.clone(),
            date_joined: Utc::now(),
        };
        s.users.push((created.clone(), new_user.password_hash.clone()));
        Ok(created)
    }
}
