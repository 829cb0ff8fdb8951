use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FichasAnamnese::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FichasAnamnese::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FichasAnamnese::Nome).string().not_null())
                    .col(ColumnDef::new(FichasAnamnese::Cpf).string().not_null())
                    .col(
                        ColumnDef::new(FichasAnamnese::DadosCliente)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FichasAnamnese::Avaliacao)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FichasAnamnese::InfoTattoo)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FichasAnamnese::Termos)
                            .char_len(1)
                            .not_null()
                            .default("N"),
                    )
                    .col(
                        ColumnDef::new(FichasAnamnese::DataPreenchimentoFicha)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(FichasAnamnese::IdProfissional).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .from(FichasAnamnese::Table, FichasAnamnese::IdProfissional)
                            .to(Profissionais::Table, Profissionais::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(FichasAnamnese::Table)
                    .col(FichasAnamnese::IdProfissional)
                    .name("idx_fichas_anamnese_id_profissional")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FichasAnamnese::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum FichasAnamnese {
    Table,
    Id,
    Nome,
    Cpf,
    DadosCliente,
    Avaliacao,
    InfoTattoo,
    Termos,
    DataPreenchimentoFicha,
    IdProfissional,
}

#[derive(Iden)]
enum Profissionais {
    Table,
    Id,
}
