use entity::categories::{self, constraints::*};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(categories::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(categories::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(categories::Column::Kind).string().not_null())
                    .primary_key(
                        Index::create()
                            .name(PK_CATEGORIES)
                            .col(categories::Column::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(categories::Entity).to_owned())
            .await
    }
}
