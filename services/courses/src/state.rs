use std::sync::Arc;

use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use ecourse_auth_types::identity::AccessTokenSecret;

use crate::domain::types::OAuth2Info;
use crate::infra::db::{
    DbCategoryRepository, DbCommentRepository, DbCourseRepository, DbLessonRepository,
    DbRatingRepository, DbReactionRepository, DbUserRepository,
};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub access_token_secret: AccessTokenSecret,
    pub oauth2_info: Arc<OAuth2Info>,
    /// Origin used to build absolute static image URLs.
    pub public_base_url: Arc<str>,
}

impl FromRef<AppState> for AccessTokenSecret {
    fn from_ref(state: &AppState) -> Self {
        state.access_token_secret.clone()
    }
}

impl AppState {
    pub fn category_repo(&self) -> DbCategoryRepository {
        DbCategoryRepository {
            db: self.db.clone(),
        }
    }

    pub fn course_repo(&self) -> DbCourseRepository {
        DbCourseRepository {
            db: self.db.clone(),
        }
    }

    pub fn lesson_repo(&self) -> DbLessonRepository {
        DbLessonRepository {
            db: self.db.clone(),
        }
    }

    pub fn comment_repo(&self) -> DbCommentRepository {
        DbCommentRepository {
            db: self.db.clone(),
        }
    }

    pub fn reaction_repo(&self) -> DbReactionRepository {
        DbReactionRepository {
            db: self.db.clone(),
        }
    }

    pub fn rating_repo(&self) -> DbRatingRepository {
        DbRatingRepository {
            db: self.db.clone(),
        }
    }

    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }
}
