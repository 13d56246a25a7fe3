//! sea-orm entities for the courses service.

pub mod actions;
pub mod categories;
pub mod comments;
pub mod courses;
pub mod lesson_tags;
pub mod lessons;
pub mod ratings;
pub mod tags;
pub mod users;
