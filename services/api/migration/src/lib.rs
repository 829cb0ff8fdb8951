use sea_orm_migration::prelude::*;

mod m20250901_000001_create_profissionais;
mod m20250901_000002_create_fichas_anamnese;
mod m20250901_000003_add_cpf_unique_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250901_000001_create_profissionais::Migration),
            Box::new(m20250901_000002_create_fichas_anamnese::Migration),
            Box::new(m20250901_000003_add_cpf_unique_indexes::Migration),
        ]
    }
}
