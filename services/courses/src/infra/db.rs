use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, SqlErr, TransactionTrait,
    sea_query::{Expr, OnConflict},
};

use ecourse_core::sea_ext::FilterContainsIgnoreCase;
use ecourse_courses_schema::{
    actions, categories, comments, courses, lesson_tags, lessons, ratings, tags, users,
};
use ecourse_domain::pagination::{Page, PageRequest};
use ecourse_domain::reaction::ReactionKind;

use crate::domain::repository::{
    CategoryRepository, CommentRepository, CourseRepository, LessonRepository, RatingRepository,
    ReactionRepository, UserRepository,
};
use crate::domain::types::{
    Category, Comment, CommentWithAuthor, Course, CourseFilter, Lesson, NewUser, Rating,
    Reaction, Tag, User,
};
use crate::error::CoursesServiceError;

// ── Category repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCategoryRepository {
    pub db: DatabaseConnection,
}

impl CategoryRepository for DbCategoryRepository {
    async fn list_all(&self) -> Result<Vec<Category>, CoursesServiceError> {
        let models = categories::Entity::find()
            .order_by_asc(categories::Column::Id)
            .all(&self.db)
            .await
            .context("list categories")?;
        Ok(models
            .into_iter()
            .map(|m| Category {
                id: m.id,
                name: m.name,
            })
            .collect())
    }
}

// ── Course repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCourseRepository {
    pub db: DatabaseConnection,
}

impl CourseRepository for DbCourseRepository {
    async fn list_active(
        &self,
        filter: &CourseFilter,
        page: PageRequest,
    ) -> Result<Page<Course>, CoursesServiceError> {
        let mut query = courses::Entity::find().filter(courses::Column::Active.eq(true));
        if let Some(text) = filter.text.as_deref() {
            query = query.filter_contains_ignore_case(courses::Column::Subject, text);
        }
        if let Some(category_id) = filter.category_id {
            query = query.filter(courses::Column::CategoryId.eq(category_id));
        }

        let total = query
            .clone()
            .count(&self.db)
            .await
            .context("count courses")?;
        let models = query
            .order_by_desc(courses::Column::Id)
            .offset(page.offset())
            .limit(page.per_page as u64)
            .all(&self.db)
            .await
            .context("list courses")?;

        Ok(Page {
            items: models.into_iter().map(course_from_model).collect(),
            total,
            request: page,
        })
    }

    async fn find_active(&self, id: i32) -> Result<Option<Course>, CoursesServiceError> {
        let model = courses::Entity::find_by_id(id)
            .filter(courses::Column::Active.eq(true))
            .one(&self.db)
            .await
            .context("find course by id")?;
        Ok(model.map(course_from_model))
    }
}

fn course_from_model(model: courses::Model) -> Course {
    Course {
        id: model.id,
        subject: model.subject,
        image: model.image,
        category_id: model.category_id,
        created_at: model.created_at,
    }
}

// ── Lesson repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbLessonRepository {
    pub db: DatabaseConnection,
}

impl LessonRepository for DbLessonRepository {
    async fn list_active_of_course(
        &self,
        course_id: i32,
        text: Option<&str>,
    ) -> Result<Vec<Lesson>, CoursesServiceError> {
        let mut query = lessons::Entity::find()
            .filter(lessons::Column::CourseId.eq(course_id))
            .filter(lessons::Column::Active.eq(true));
        if let Some(text) = text {
            query = query.filter_contains_ignore_case(lessons::Column::Subject, text);
        }
        let models = query
            .order_by_asc(lessons::Column::Id)
            .all(&self.db)
            .await
            .context("list lessons of course")?;
        Ok(models.into_iter().map(lesson_from_model).collect())
    }

    async fn find_active(&self, id: i32) -> Result<Option<Lesson>, CoursesServiceError> {
        let model = lessons::Entity::find_by_id(id)
            .filter(lessons::Column::Active.eq(true))
            .one(&self.db)
            .await
            .context("find lesson by id")?;
        Ok(model.map(lesson_from_model))
    }

    async fn tags_of(&self, lesson_id: i32) -> Result<Vec<Tag>, CoursesServiceError> {
        let models = tags::Entity::find()
            .inner_join(lesson_tags::Entity)
            .filter(lesson_tags::Column::LessonId.eq(lesson_id))
            .order_by_asc(tags::Column::Id)
            .all(&self.db)
            .await
            .context("list tags of lesson")?;
        Ok(models
            .into_iter()
            .map(|m| Tag {
                id: m.id,
                name: m.name,
            })
            .collect())
    }

    async fn attach_tags(
        &self,
        lesson_id: i32,
        names: &[String],
    ) -> Result<(), CoursesServiceError> {
        let txn = self.db.begin().await.context("begin attach tags")?;

        for name in names {
            // Insert-or-ignore then read back, so a tag committed concurrently is reused.
            tags::Entity::insert(tags::ActiveModel {
                name: Set(name.clone()),
                ..Default::default()
            })
            .on_conflict(
                OnConflict::column(tags::Column::Name)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&txn)
            .await
            .context("create tag")?;
            let tag = tags::Entity::find()
                .filter(tags::Column::Name.eq(name.as_str()))
                .one(&txn)
                .await
                .context("find tag by name")?
                .with_context(|| format!("tag {name:?} missing after insert"))?;

            lesson_tags::Entity::insert(lesson_tags::ActiveModel {
                lesson_id: Set(lesson_id),
                tag_id: Set(tag.id),
            })
            .on_conflict(
                OnConflict::columns([lesson_tags::Column::LessonId, lesson_tags::Column::TagId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&txn)
            .await
            .context("link tag to lesson")?;
        }

        lessons::Entity::update_many()
            .col_expr(lessons::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(lessons::Column::Id.eq(lesson_id))
            .exec(&txn)
            .await
            .context("touch lesson updated_at")?;

        txn.commit().await.context("commit attach tags")?;
        Ok(())
    }
}

fn lesson_from_model(model: lessons::Model) -> Lesson {
    Lesson {
        id: model.id,
        subject: model.subject,
        image: model.image,
        content: model.content,
        course_id: model.course_id,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Comment repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCommentRepository {
    pub db: DatabaseConnection,
}

impl CommentRepository for DbCommentRepository {
    async fn list_of_lesson(
        &self,
        lesson_id: i32,
    ) -> Result<Vec<CommentWithAuthor>, CoursesServiceError> {
        let rows = comments::Entity::find()
            .filter(comments::Column::LessonId.eq(lesson_id))
            .find_also_related(users::Entity)
            .order_by_desc(comments::Column::Id)
            .all(&self.db)
            .await
            .context("list comments of lesson")?;
        Ok(rows
            .into_iter()
            .filter_map(|(comment, author)| {
                Some(CommentWithAuthor {
                    comment: comment_from_model(comment),
                    author: user_from_model(author?),
                })
            })
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Comment>, CoursesServiceError> {
        let model = comments::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find comment by id")?;
        Ok(model.map(comment_from_model))
    }

    async fn create(
        &self,
        lesson_id: i32,
        creator_id: i32,
        content: &str,
    ) -> Result<Comment, CoursesServiceError> {
        let now = Utc::now();
        let model = comments::ActiveModel {
            content: Set(content.to_owned()),
            lesson_id: Set(lesson_id),
            creator_id: Set(creator_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create comment")?;
        Ok(comment_from_model(model))
    }

    async fn update_content(
        &self,
        id: i32,
        content: &str,
    ) -> Result<Comment, CoursesServiceError> {
        let result = comments::ActiveModel {
            id: Set(id),
            content: Set(content.to_owned()),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .update(&self.db)
        .await;
        match result {
            Ok(model) => Ok(comment_from_model(model)),
            Err(DbErr::RecordNotUpdated) => Err(CoursesServiceError::CommentNotFound),
            Err(e) => Err(anyhow::Error::new(e).context("update comment").into()),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool, CoursesServiceError> {
        let result = comments::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete comment")?;
        Ok(result.rows_affected > 0)
    }
}

fn comment_from_model(model: comments::Model) -> Comment {
    Comment {
        id: model.id,
        content: model.content,
        lesson_id: model.lesson_id,
        creator_id: model.creator_id,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Reaction repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbReactionRepository {
    pub db: DatabaseConnection,
}

impl ReactionRepository for DbReactionRepository {
    async fn create(
        &self,
        lesson_id: i32,
        creator_id: i32,
        kind: ReactionKind,
    ) -> Result<Reaction, CoursesServiceError> {
        let now = Utc::now();
        let model = actions::ActiveModel {
            kind: Set(i16::from(kind.as_u8())),
            creator_id: Set(creator_id),
            lesson_id: Set(lesson_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create reaction")?;
        Ok(Reaction {
            id: model.id,
            kind,
            lesson_id: model.lesson_id,
            creator_id: model.creator_id,
            created_at: model.created_at,
        })
    }
}

// ── Rating repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRatingRepository {
    pub db: DatabaseConnection,
}

impl RatingRepository for DbRatingRepository {
    async fn create(
        &self,
        lesson_id: i32,
        creator_id: i32,
        rate: i16,
    ) -> Result<Rating, CoursesServiceError> {
        let now = Utc::now();
        let model = ratings::ActiveModel {
            rate: Set(rate),
            creator_id: Set(creator_id),
            lesson_id: Set(lesson_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create rating")?;
        Ok(Rating {
            id: model.id,
            rate: model.rate,
            lesson_id: model.lesson_id,
            creator_id: model.creator_id,
            created_at: model.created_at,
        })
    }
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn exists_by_username(&self, username: &str) -> Result<bool, CoursesServiceError> {
        let count = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .count(&self.db)
            .await
            .context("count users by username")?;
        Ok(count > 0)
    }

    async fn create(&self, user: &NewUser) -> Result<User, CoursesServiceError> {
        let result = users::ActiveModel {
            username: Set(user.username.clone()),
            password_hash: Set(user.password_hash.clone()),
            email: Set(user.email.clone()),
            first_name: Set(user.first_name.clone()),
            last_name: Set(user.last_name.clone()),
            avatar: Set(None),
            is_active: Set(true),
            date_joined: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await;
        match result {
            Ok(model) => Ok(user_from_model(model)),
            // Lost a race with a concurrent signup for the same username.
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(CoursesServiceError::UserAlreadyExists)
            }
            Err(e) => Err(anyhow::Error::new(e).context("create user").into()),
        }
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        username: model.username,
        first_name: model.first_name,
        last_name: model.last_name,
        email: model.email,
        date_joined: model.date_joined,
    }
}
