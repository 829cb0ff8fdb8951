use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Profissionais::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Profissionais::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Profissionais::Nome).string().not_null())
                    .col(
                        ColumnDef::new(Profissionais::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Profissionais::Senha).string().not_null())
                    .col(ColumnDef::new(Profissionais::Telefone).string())
                    .col(
                        ColumnDef::new(Profissionais::CriadoEm)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Profissionais::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Profissionais {
    Table,
    Id,
    Nome,
    Email,
    Senha,
    Telefone,
    CriadoEm,
}
