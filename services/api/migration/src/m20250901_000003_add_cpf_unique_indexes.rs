use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// Partial unique indexes enforce the per-scope CPF invariant at the store:
// one record per (cpf, id_profissional), and one unattributed record per
// cpf. The insert path relies on the violation error to reject duplicate
// submissions that race past the pre-insert probe. sea-query's index
// builder has no partial-index support, hence raw SQL.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(
            "CREATE UNIQUE INDEX uq_fichas_anamnese_cpf_profissional \
             ON fichas_anamnese (cpf, id_profissional) \
             WHERE id_profissional IS NOT NULL",
        )
        .await?;
        db.execute_unprepared(
            "CREATE UNIQUE INDEX uq_fichas_anamnese_cpf_sem_profissional \
             ON fichas_anamnese (cpf) \
             WHERE id_profissional IS NULL",
        )
        .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared("DROP INDEX uq_fichas_anamnese_cpf_sem_profissional")
            .await?;
        db.execute_unprepared("DROP INDEX uq_fichas_anamnese_cpf_profissional")
            .await?;
        Ok(())
    }
}
