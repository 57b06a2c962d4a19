use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Servers::Table)
                    .if_not_exists()
                    .col(big_integer(Servers::Id).auto_increment().primary_key())
                    .col(string_uniq(Servers::Name))
                    .col(string_uniq(Servers::Address))
                    .col(
                        string_len(Servers::Status, 16)
                            .default("STOPPED")
                            .check(Expr::col(Servers::Status).is_in(["RUNNING", "STOPPED"])),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Servers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Servers {
    Table,
    Id,
    Name,
    Address,
    Status,
}
