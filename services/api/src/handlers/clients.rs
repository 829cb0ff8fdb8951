use axum::{Json, extract::State, response::IntoResponse};
use serde::{Deserialize, Serialize};

use anamnese_auth_types::identity::SessionIdentity;
use anamnese_core::envelope::ApiResponse;
use anamnese_domain::pagination::{PageInfo, PageRequest};

use crate::domain::types::{ClientRecord, ClientSummary, SearchKey};
use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::clients::{
    ClientLookup, ListClientsUseCase, LookupClientUseCase, SearchClientsUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

/// Full record, serialized with the store's column names — the shape the
/// frontend has always consumed.
#[derive(Serialize)]
pub struct ClientRecordResponse {
    pub id: i32,
    pub nome: String,
    pub cpf: String,
    pub dados_cliente: serde_json::Value,
    pub avaliacao: serde_json::Value,
    pub info_tattoo: serde_json::Value,
    pub termos: String,
    #[serde(serialize_with = "anamnese_core::serde::to_rfc3339_ms")]
    pub data_preenchimento_ficha: chrono::DateTime<chrono::Utc>,
    pub id_profissional: Option<i32>,
}

impl From<ClientRecord> for ClientRecordResponse {
    fn from(record: ClientRecord) -> Self {
        Self {
            id: record.id,
            nome: record.nome,
            cpf: record.cpf,
            dados_cliente: record.dados_cliente,
            avaliacao: record.avaliacao,
            info_tattoo: record.info_tattoo,
            termos: record.termos,
            data_preenchimento_ficha: record.data_preenchimento_ficha,
            id_profissional: record.id_profissional,
        }
    }
}

/// Listing/autocomplete row. The contact fields serialize as `null` when
/// the record has none.
#[derive(Serialize)]
pub struct ClientSummaryResponse {
    pub id: i32,
    pub nome: String,
    pub cpf: String,
    pub email: Option<String>,
    pub celular: Option<String>,
    pub data_nascimento: Option<String>,
}

impl From<ClientSummary> for ClientSummaryResponse {
    fn from(summary: ClientSummary) -> Self {
        Self {
            id: summary.id,
            nome: summary.nome,
            cpf: summary.cpf,
            email: summary.email,
            celular: summary.celular,
            data_nascimento: summary.data_nascimento,
        }
    }
}

/// Listing envelope: `pagination` rides beside `data`, not inside it.
#[derive(Serialize)]
pub struct ClientListResponse {
    pub success: bool,
    pub message: String,
    pub data: Vec<ClientSummaryResponse>,
    pub pagination: PageInfo,
}

// ── Query params ─────────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientsQuery {
    pub cpf: Option<String>,
    pub id: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub professional_id: Option<i32>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub limit: Option<u64>,
}

// ── GET /clients ─────────────────────────────────────────────────────────────

/// Dispatches on the query string: `cpf`/`id` present means point lookup,
/// anything else is the paginated listing.
pub async fn get_clients(
    identity: SessionIdentity,
    State(state): State<AppState>,
    axum::extract::RawQuery(raw_query): axum::extract::RawQuery,
) -> Result<axum::response::Response, ApiError> {
    let query: ClientsQuery = raw_query
        .as_deref()
        .map(serde_qs::from_str)
        .transpose()
        .map_err(|_| ApiError::InvalidQuery)?
        .unwrap_or_default();

    if let Some(cpf) = query.cpf {
        let found = lookup(&state, ClientLookup::Cpf(cpf)).await?;
        return Ok(lookup_response(found));
    }

    if let Some(id) = query.id {
        let id: i32 = id.trim().parse().map_err(|_| ApiError::InvalidClientId)?;
        let found = lookup(&state, ClientLookup::Id(id)).await?;
        return Ok(lookup_response(found));
    }

    // Listing: an explicit professionalId wins over the bearer identity.
    let professional_id = query.professional_id.or(identity.professional_id());
    let page = PageRequest {
        limit: query.limit.unwrap_or(20),
        page: query.page.unwrap_or(1),
    };
    let usecase = ListClientsUseCase {
        records: state.client_record_repo(),
    };
    let (rows, pagination) = usecase.execute(professional_id, page).await?;
    let message = if rows.is_empty() {
        "Nenhum cliente cadastrado"
    } else {
        "Clientes listados com sucesso!"
    };
    Ok(Json(ClientListResponse {
        success: true,
        message: message.to_owned(),
        data: rows.into_iter().map(ClientSummaryResponse::from).collect(),
        pagination,
    })
    .into_response())
}

async fn lookup(state: &AppState, key: ClientLookup) -> Result<Option<ClientRecord>, ApiError> {
    let usecase = LookupClientUseCase {
        records: state.client_record_repo(),
    };
    usecase.execute(key).await
}

/// A miss is a 200 with `data: null`, mirroring the legacy contract.
fn lookup_response(found: Option<ClientRecord>) -> axum::response::Response {
    match found {
        Some(record) => Json(ApiResponse::ok(
            "Cliente encontrado com sucesso!",
            serde_json::to_value(ClientRecordResponse::from(record)).unwrap_or_default(),
        ))
        .into_response(),
        None => Json(ApiResponse::ok(
            "Cliente não encontrado",
            serde_json::Value::Null,
        ))
        .into_response(),
    }
}

// ── GET /clients/search ──────────────────────────────────────────────────────

pub async fn search_clients(
    State(state): State<AppState>,
    axum::extract::RawQuery(raw_query): axum::extract::RawQuery,
) -> Result<Json<ApiResponse<Vec<ClientSummaryResponse>>>, ApiError> {
    let query: SearchQuery = raw_query
        .as_deref()
        .map(serde_qs::from_str)
        .transpose()
        .map_err(|_| ApiError::InvalidQuery)?
        .unwrap_or_default();

    let q = query.q.unwrap_or_default();
    let usecase = SearchClientsUseCase {
        records: state.client_record_repo(),
    };
    let rows = usecase.execute(&q, query.limit).await?;
    let message = if SearchKey::from_query(&q).is_none() {
        "Digite pelo menos 2 caracteres para buscar"
    } else if rows.is_empty() {
        "Nenhum cliente encontrado"
    } else {
        "Clientes encontrados com sucesso!"
    };
    Ok(Json(ApiResponse::ok(
        message,
        rows.into_iter().map(ClientSummaryResponse::from).collect(),
    )))
}
