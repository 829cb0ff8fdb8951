#![allow(async_fn_in_trait)]

use anamnese_domain::pagination::PageRequest;
use anamnese_domain::record::NewClientRecord;

use crate::domain::types::{
    ClientRecord, ClientSummary, NewProfessional, Professional, SearchKey,
};
use crate::error::ApiError;

/// Repository for anamnese records.
pub trait ClientRecordRepository: Send + Sync {
    async fn find_by_cpf(&self, cpf: &str) -> Result<Option<ClientRecord>, ApiError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<ClientRecord>, ApiError>;

    /// Duplicate probe: is there already a record for this CPF within the
    /// given professional scope (`None` = the unattributed scope)?
    async fn exists_in_scope(
        &self,
        cpf: &str,
        professional_id: Option<i32>,
    ) -> Result<bool, ApiError>;

    /// Insert a mapped record, stamping `data_preenchimento_ficha` with
    /// "now". Returns the assigned id. A unique-index violation (two
    /// submissions racing past the probe) surfaces as
    /// [`ApiError::DuplicateCpf`].
    async fn insert(&self, record: &NewClientRecord) -> Result<i32, ApiError>;

    /// Page of valid rows (non-blank nome and cpf), optionally scoped to a
    /// professional, ordered case-insensitively by nome. Returns the page
    /// plus the total row count for the same filter.
    async fn list(
        &self,
        professional_id: Option<i32>,
        page: PageRequest,
    ) -> Result<(Vec<ClientSummary>, u64), ApiError>;

    /// Autocomplete lookup, capped at `limit`, ordered by nome.
    async fn search(&self, key: &SearchKey, limit: u64) -> Result<Vec<ClientSummary>, ApiError>;
}

/// Repository for professional accounts.
pub trait ProfessionalRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Professional>, ApiError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Professional>, ApiError>;

    /// Insert a new account. A unique-email violation surfaces as
    /// [`ApiError::EmailTaken`].
    async fn create(&self, professional: &NewProfessional) -> Result<Professional, ApiError>;

    /// Overwrite the stored password (the reset flow).
    async fn update_senha(&self, id: i32, senha: &str) -> Result<(), ApiError>;
}
