use sea_orm::entity::prelude::*;

/// A professional account (tattoo artist) that owns scoped client records.
///
/// `senha` is stored in plaintext — a documented weakness of the system
/// this service replaces, kept for wire/data parity.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "profissionais")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nome: String,
    #[sea_orm(unique)]
    pub email: String,
    pub senha: String,
    pub telefone: Option<String>,
    pub criado_em: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::fichas_anamnese::Entity")]
    FichasAnamnese,
}

impl Related<super::fichas_anamnese::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FichasAnamnese.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
