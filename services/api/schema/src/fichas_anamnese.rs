use sea_orm::entity::prelude::*;

/// One filled anamnese form. The three `jsonb` columns carry the nested
/// document sections exactly as the mapper assembles them.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "fichas_anamnese")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nome: String,
    /// Digits-only, length 11. Uniqueness is scoped per professional via
    /// partial unique indexes (see the migration crate).
    pub cpf: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub dados_cliente: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub avaliacao: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub info_tattoo: Json,
    /// `"S"` or `"N"`, derived at mapping time.
    pub termos: String,
    pub data_preenchimento_ficha: chrono::DateTime<chrono::Utc>,
    pub id_profissional: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::profissionais::Entity",
        from = "Column::IdProfissional",
        to = "super::profissionais::Column::Id"
    )]
    Profissional,
}

impl Related<super::profissionais::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Profissional.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
