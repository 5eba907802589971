use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AboutUs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AboutUs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AboutUs::Title).string_len(255).not_null())
                    .col(ColumnDef::new(AboutUs::Description).text().not_null())
                    .col(ColumnDef::new(AboutUs::Mission).text())
                    .col(ColumnDef::new(AboutUs::Vision).text())
                    .col(ColumnDef::new(AboutUs::TeamMembers).text())
                    .col(ColumnDef::new(AboutUs::Images).text())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AboutUs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AboutUs {
    Table,
    Id,
    Title,
    Description,
    Mission,
    Vision,
    TeamMembers,
    Images,
}
