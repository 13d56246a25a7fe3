use sea_orm::entity::prelude::*;

/// A lesson belonging to a course. `(subject, course_id)` is unique.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "lessons")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub subject: String,
    pub image: Option<String>,
    pub active: bool,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub course_id: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id",
        on_delete = "Cascade"
    )]
    Course,
    #[sea_orm(has_many = "super::comments::Entity")]
    Comments,
    #[sea_orm(has_many = "super::lesson_tags::Entity")]
    LessonTags,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::comments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comments.def()
    }
}

impl Related<super::lesson_tags::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LessonTags.def()
    }
}

impl Related<super::tags::Entity> for Entity {
    fn to() -> RelationDef {
        super::lesson_tags::Relation::Tag.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::lesson_tags::Relation::Lesson.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
