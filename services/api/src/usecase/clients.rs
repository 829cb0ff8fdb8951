//! Client lookup, listing and autocomplete.

use anamnese_domain::cpf;
use anamnese_domain::pagination::{PageInfo, PageRequest};

use crate::domain::repository::ClientRecordRepository;
use crate::domain::types::{ClientRecord, ClientSummary, SearchKey};
use crate::error::ApiError;

/// Autocomplete result cap when the caller does not ask for one.
pub const DEFAULT_SEARCH_LIMIT: u64 = 10;
/// Hard cap on autocomplete results regardless of the caller's ask.
pub const MAX_SEARCH_LIMIT: u64 = 50;

// ── Lookup ───────────────────────────────────────────────────────────────────

/// Point-query key: a raw (possibly formatted) CPF or a record id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientLookup {
    Cpf(String),
    Id(i32),
}

pub struct LookupClientUseCase<C: ClientRecordRepository> {
    pub records: C,
}

impl<C: ClientRecordRepository> LookupClientUseCase<C> {
    /// A miss is not an error — the endpoint answers 200 with `data: null`.
    pub async fn execute(&self, lookup: ClientLookup) -> Result<Option<ClientRecord>, ApiError> {
        match lookup {
            ClientLookup::Cpf(raw) => {
                let digits = cpf::normalize(&raw);
                if digits.is_empty() {
                    return Err(ApiError::MissingCpfQuery);
                }
                self.records.find_by_cpf(&digits).await
            }
            ClientLookup::Id(id) => self.records.find_by_id(id).await,
        }
    }
}

// ── Listing ──────────────────────────────────────────────────────────────────

pub struct ListClientsUseCase<C: ClientRecordRepository> {
    pub records: C,
}

impl<C: ClientRecordRepository> ListClientsUseCase<C> {
    pub async fn execute(
        &self,
        professional_id: Option<i32>,
        page: PageRequest,
    ) -> Result<(Vec<ClientSummary>, PageInfo), ApiError> {
        let page = page.clamped();
        let (rows, total) = self.records.list(professional_id, page).await?;
        Ok((rows, PageInfo::new(page, total)))
    }
}

// ── Autocomplete ─────────────────────────────────────────────────────────────

pub struct SearchClientsUseCase<C: ClientRecordRepository> {
    pub records: C,
}

impl<C: ClientRecordRepository> SearchClientsUseCase<C> {
    /// Queries shorter than 2 characters short-circuit to an empty result
    /// set without a store round-trip.
    pub async fn execute(
        &self,
        query: &str,
        limit: Option<u64>,
    ) -> Result<Vec<ClientSummary>, ApiError> {
        let Some(key) = SearchKey::from_query(query) else {
            return Ok(vec![]);
        };
        let limit = limit
            .unwrap_or(DEFAULT_SEARCH_LIMIT)
            .clamp(1, MAX_SEARCH_LIMIT);
        self.records.search(&key, limit).await
    }
}
