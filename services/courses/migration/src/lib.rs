pub use sea_orm_migration::prelude::*;

mod m20261018_000001_create_users;
mod m20261018_000002_create_categories;
mod m20261018_000003_create_courses;
mod m20261018_000004_create_lessons;
mod m20261018_000005_create_tags;
mod m20261018_000006_create_lesson_tags;
mod m20261018_000007_create_comments;
mod m20261018_000008_create_actions;
mod m20261018_000009_create_ratings;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261018_000001_create_users::Migration),
            Box::new(m20261018_000002_create_categories::Migration),
            Box::new(m20261018_000003_create_courses::Migration),
            Box::new(m20261018_000004_create_lessons::Migration),
            Box::new(m20261018_000005_create_tags::Migration),
            Box::new(m20261018_000006_create_lesson_tags::Migration),
            Box::new(m20261018_000007_create_comments::Migration),
            Box::new(m20261018_000008_create_actions::Migration),
            Box::new(m20261018_000009_create_ratings::Migration),
        ]
    }
}
