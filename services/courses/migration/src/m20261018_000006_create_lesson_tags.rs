use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LessonTags::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(LessonTags::LessonId).integer().not_null())
                    .col(ColumnDef::new(LessonTags::TagId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(LessonTags::LessonId)
                            .col(LessonTags::TagId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(LessonTags::Table, LessonTags::LessonId)
                            .to(Lessons::Table, Lessons::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(LessonTags::Table, LessonTags::TagId)
                            .to(Tags::Table, Tags::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(LessonTags::Table)
                    .col(LessonTags::TagId)
                    .name("idx_lesson_tags_tag_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LessonTags::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum LessonTags {
    Table,
    LessonId,
    TagId,
}

#[derive(Iden)]
enum Lessons {
    Table,
    Id,
}

#[derive(Iden)]
enum Tags {
    Table,
    Id,
}
