//! Per-action access rules for lesson endpoints and the comment ownership check.

use crate::domain::types::Comment;
use crate::error::CoursesServiceError;

/// Operations a caller can perform on a lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonAction {
    Retrieve,
    ListComments,
    AddTags,
    AddComment,
    React,
    Rate,
}

impl LessonAction {
    pub const fn requires_authentication(self) -> bool {
        match self {
            Self::AddComment | Self::React | Self::Rate => true,
            Self::Retrieve | Self::ListComments | Self::AddTags => false,
        }
    }

    /// Gate `caller` (a user id, or `None` when anonymous) for this action.
    pub fn authorize(self, caller: Option<i32>) -> Result<Option<i32>, CoursesServiceError> {
        if self.requires_authentication() && caller.is_none() {
            return Err(CoursesServiceError::Unauthorized);
        }
        Ok(caller)
    }

    /// The acting user for an action that records its author.
    pub fn acting_user(self, caller: Option<i32>) -> Result<i32, CoursesServiceError> {
        self.authorize(caller)?
            .ok_or(CoursesServiceError::Unauthorized)
    }
}

/// Only the creator of a comment may change or remove it.
pub fn ensure_comment_owner(comment: &Comment, user_id: i32) -> Result<(), CoursesServiceError> {
    if comment.is_owned_by(user_id) {
        Ok(())
    } else {
        Err(CoursesServiceError::Forbidden)
    }
}
