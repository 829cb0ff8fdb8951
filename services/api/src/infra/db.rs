use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, Order,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, SqlErr,
    sea_query::{Expr, Func},
};

use anamnese_api_schema::{fichas_anamnese, profissionais};
use anamnese_domain::pagination::PageRequest;
use anamnese_domain::record::NewClientRecord;

use crate::domain::repository::{ClientRecordRepository, ProfessionalRepository};
use crate::domain::types::{
    ClientRecord, ClientSummary, NewProfessional, Professional, SearchKey,
};
use crate::error::ApiError;

// ── Client record repository ─────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbClientRecordRepository {
    pub db: DatabaseConnection,
}

impl ClientRecordRepository for DbClientRecordRepository {
    async fn find_by_cpf(&self, cpf: &str) -> Result<Option<ClientRecord>, ApiError> {
        let model = fichas_anamnese::Entity::find()
            .filter(fichas_anamnese::Column::Cpf.eq(cpf))
            .one(&self.db)
            .await
            .context("find record by cpf")?;
        Ok(model.map(record_from_model))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<ClientRecord>, ApiError> {
        let model = fichas_anamnese::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find record by id")?;
        Ok(model.map(record_from_model))
    }

    async fn exists_in_scope(
        &self,
        cpf: &str,
        professional_id: Option<i32>,
    ) -> Result<bool, ApiError> {
        let mut query =
            fichas_anamnese::Entity::find().filter(fichas_anamnese::Column::Cpf.eq(cpf));
        query = match professional_id {
            Some(id) => query.filter(fichas_anamnese::Column::IdProfissional.eq(id)),
            None => query.filter(fichas_anamnese::Column::IdProfissional.is_null()),
        };
        let count = query
            .count(&self.db)
            .await
            .context("probe duplicate cpf in scope")?;
        Ok(count > 0)
    }

    async fn insert(&self, record: &NewClientRecord) -> Result<i32, ApiError> {
        let result = fichas_anamnese::ActiveModel {
            nome: Set(record.nome.clone()),
            cpf: Set(record.cpf.clone()),
            dados_cliente: Set(record.dados_cliente.clone()),
            avaliacao: Set(record.avaliacao.clone()),
            info_tattoo: Set(record.info_tattoo.clone()),
            termos: Set(record.termos.as_str().to_owned()),
            data_preenchimento_ficha: Set(Utc::now()),
            id_profissional: Set(record.id_profissional),
            ..Default::default()
        }
        .insert(&self.db)
        .await;
        match result {
            Ok(model) => Ok(model.id),
            // The partial unique indexes firing means another submission
            // for the same (cpf, scope) won the race.
            Err(e) => match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(ApiError::DuplicateCpf),
                _ => Err(anyhow::Error::from(e)
                    .context("insert anamnese record")
                    .into()),
            },
        }
    }

    async fn list(
        &self,
        professional_id: Option<i32>,
        page: PageRequest,
    ) -> Result<(Vec<ClientSummary>, u64), ApiError> {
        // Legacy rows were written without validation; blank nome/cpf rows
        // are filtered out in SQL rather than after the fact.
        let mut base = fichas_anamnese::Entity::find()
            .filter(Expr::cust("TRIM(nome) <> ''"))
            .filter(Expr::cust("TRIM(cpf) <> ''"));
        if let Some(id) = professional_id {
            base = base.filter(fichas_anamnese::Column::IdProfissional.eq(id));
        }

        let total = base
            .clone()
            .count(&self.db)
            .await
            .context("count listed records")?;

        let models = base
            .order_by(
                Expr::expr(Func::lower(Expr::col(fichas_anamnese::Column::Nome))),
                Order::Asc,
            )
            .offset(page.offset())
            .limit(page.limit as u64)
            .all(&self.db)
            .await
            .context("list records")?;

        Ok((models.into_iter().map(summary_from_model).collect(), total))
    }

    async fn search(&self, key: &SearchKey, limit: u64) -> Result<Vec<ClientSummary>, ApiError> {
        let query = match key {
            SearchKey::Cpf(digits) => fichas_anamnese::Entity::find()
                .filter(fichas_anamnese::Column::Cpf.contains(digits.as_str())),
            SearchKey::Nome(lower) => fichas_anamnese::Entity::find().filter(
                Expr::expr(Func::lower(Expr::col(fichas_anamnese::Column::Nome)))
                    .like(format!("%{lower}%")),
            ),
        };
        let models = query
            .order_by(
                Expr::expr(Func::lower(Expr::col(fichas_anamnese::Column::Nome))),
                Order::Asc,
            )
            .limit(limit)
            .all(&self.db)
            .await
            .context("search records")?;
        Ok(models.into_iter().map(summary_from_model).collect())
    }
}

fn record_from_model(model: fichas_anamnese::Model) -> ClientRecord {
    ClientRecord {
        id: model.id,
        nome: model.nome,
        cpf: model.cpf,
        dados_cliente: model.dados_cliente,
        avaliacao: model.avaliacao,
        info_tattoo: model.info_tattoo,
        termos: model.termos,
        data_preenchimento_ficha: model.data_preenchimento_ficha,
        id_profissional: model.id_profissional,
    }
}

fn summary_from_model(model: fichas_anamnese::Model) -> ClientSummary {
    ClientSummary::from_parts(model.id, model.nome, model.cpf, &model.dados_cliente)
}

// ── Professional repository ──────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbProfessionalRepository {
    pub db: DatabaseConnection,
}

impl ProfessionalRepository for DbProfessionalRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Professional>, ApiError> {
        let model = profissionais::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find professional by id")?;
        Ok(model.map(professional_from_model))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Professional>, ApiError> {
        let model = profissionais::Entity::find()
            .filter(profissionais::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find professional by email")?;
        Ok(model.map(professional_from_model))
    }

    async fn create(&self, professional: &NewProfessional) -> Result<Professional, ApiError> {
        let result = profissionais::ActiveModel {
            nome: Set(professional.nome.clone()),
            email: Set(professional.email.clone()),
            senha: Set(professional.senha.clone()),
            telefone: Set(professional.telefone.clone()),
            criado_em: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await;
        match result {
            Ok(model) => Ok(professional_from_model(model)),
            Err(e) => match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(ApiError::EmailTaken),
                _ => Err(anyhow::Error::from(e).context("create professional").into()),
            },
        }
    }

    async fn update_senha(&self, id: i32, senha: &str) -> Result<(), ApiError> {
        profissionais::ActiveModel {
            id: Set(id),
            senha: Set(senha.to_owned()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("update professional senha")?;
        Ok(())
    }
}

fn professional_from_model(model: profissionais::Model) -> Professional {
    Professional {
        id: model.id,
        nome: model.nome,
        email: model.email,
        senha: model.senha,
        telefone: model.telefone,
        criado_em: model.criado_em,
    }
}
