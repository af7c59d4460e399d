use entity::{
    categories,
    questions::{self, constraints::*},
};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(questions::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(questions::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(questions::Column::Question).text().not_null())
                    .col(ColumnDef::new(questions::Column::Answer).text().not_null())
                    .col(
                        ColumnDef::new(questions::Column::Category)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(questions::Column::Difficulty)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name(PK_QUESTIONS)
                            .col(questions::Column::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_QUESTIONS_CATEGORY)
                            .from(questions::Entity, questions::Column::Category)
                            .to(categories::Entity, categories::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_QUESTIONS_CATEGORY)
                    .table(questions::Entity)
                    .col(questions::Column::Category)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(questions::Entity).to_owned())
            .await
    }
}
