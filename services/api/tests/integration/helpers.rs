use std::sync::{Arc, Mutex};

use chrono::Utc;

use anamnese_api::domain::repository::{ClientRecordRepository, ProfessionalRepository};
use anamnese_api::domain::types::{
    ClientRecord, ClientSummary, NewProfessional, Professional, SearchKey,
};
use anamnese_api::error::ApiError;
use anamnese_domain::pagination::PageRequest;
use anamnese_domain::record::NewClientRecord;

// ── InMemoryRecordRepo ───────────────────────────────────────────────────────

/// Store stand-in that mimics the real repository's contract, including
/// the per-scope unique indexes: `insert` rejects a duplicate even when
/// the probe was skipped, exactly like the database constraint.
pub struct InMemoryRecordRepo {
    pub records: Arc<Mutex<Vec<ClientRecord>>>,
    /// When set, `exists_in_scope` always answers "no duplicate" — used to
    /// simulate two submissions racing past the probe.
    pub blind_probe: bool,
}

impl InMemoryRecordRepo {
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(vec![])),
            blind_probe: false,
        }
    }

    pub fn with_blind_probe() -> Self {
        Self {
            records: Arc::new(Mutex::new(vec![])),
            blind_probe: true,
        }
    }

    pub fn records_handle(&self) -> Arc<Mutex<Vec<ClientRecord>>> {
        Arc::clone(&self.records)
    }

    /// Seed a raw row, bypassing every check — the legacy data path.
    pub fn seed(&self, nome: &str, cpf: &str, id_profissional: Option<i32>) {
        let mut records = self.records.lock().unwrap();
        let id = records.len() as i32 + 1;
        records.push(ClientRecord {
            id,
            nome: nome.to_owned(),
            cpf: cpf.to_owned(),
            dados_cliente: serde_json::json!({
                "email": format!("cliente{id}@example.com"),
                "celular": "(11) 90000-0000",
                "dataNascimento": "1990-01-01"
            }),
            avaliacao: serde_json::json!({}),
            info_tattoo: serde_json::json!({}),
            termos: "S".to_owned(),
            data_preenchimento_ficha: Utc::now(),
            id_profissional,
        });
    }

    fn clone_handle(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
            blind_probe: self.blind_probe,
        }
    }
}

impl Clone for InMemoryRecordRepo {
    fn clone(&self) -> Self {
        self.clone_handle()
    }
}

fn summary_of(record: &ClientRecord) -> ClientSummary {
    ClientSummary::from_parts(
        record.id,
        record.nome.clone(),
        record.cpf.clone(),
        &record.dados_cliente,
    )
}

impl ClientRecordRepository for InMemoryRecordRepo {
    async fn find_by_cpf(&self, cpf: &str) -> Result<Option<ClientRecord>, ApiError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.cpf == cpf)
            .cloned())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<ClientRecord>, ApiError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn exists_in_scope(
        &self,
        cpf: &str,
        professional_id: Option<i32>,
    ) -> Result<bool, ApiError> {
        if self.blind_probe {
            return Ok(false);
        }
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .any(|r| r.cpf == cpf && r.id_profissional == professional_id))
    }

    async fn insert(&self, record: &NewClientRecord) -> Result<i32, ApiError> {
        let mut records = self.records.lock().unwrap();
        // The unique-index stand-in: checked regardless of the probe.
        if records
            .iter()
            .any(|r| r.cpf == record.cpf && r.id_profissional == record.id_profissional)
        {
            return Err(ApiError::DuplicateCpf);
        }
        let id = records.len() as i32 + 1;
        records.push(ClientRecord {
            id,
            nome: record.nome.clone(),
            cpf: record.cpf.clone(),
            dados_cliente: record.dados_cliente.clone(),
            avaliacao: record.avaliacao.clone(),
            info_tattoo: record.info_tattoo.clone(),
            termos: record.termos.as_str().to_owned(),
            data_preenchimento_ficha: Utc::now(),
            id_profissional: record.id_profissional,
        });
        Ok(id)
    }

    async fn list(
        &self,
        professional_id: Option<i32>,
        page: PageRequest,
    ) -> Result<(Vec<ClientSummary>, u64), ApiError> {
        let records = self.records.lock().unwrap();
        let mut rows: Vec<&ClientRecord> = records
            .iter()
            .filter(|r| !r.nome.trim().is_empty() && !r.cpf.trim().is_empty())
            .filter(|r| professional_id.is_none() || r.id_profissional == professional_id)
            .collect();
        rows.sort_by_key(|r| r.nome.to_lowercase());
        let total = rows.len() as u64;
        let page_rows = rows
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit as usize)
            .map(summary_of)
            .collect();
        Ok((page_rows, total))
    }

    async fn search(&self, key: &SearchKey, limit: u64) -> Result<Vec<ClientSummary>, ApiError> {
        let records = self.records.lock().unwrap();
        let mut rows: Vec<&ClientRecord> = records
            .iter()
            .filter(|r| match key {
                SearchKey::Cpf(digits) => r.cpf.contains(digits.as_str()),
                SearchKey::Nome(lower) => r.nome.to_lowercase().contains(lower.as_str()),
            })
            .collect();
        rows.sort_by_key(|r| r.nome.to_lowercase());
        Ok(rows.into_iter().take(limit as usize).map(summary_of).collect())
    }
}

// ── InMemoryProfessionalRepo ─────────────────────────────────────────────────

pub struct InMemoryProfessionalRepo {
    pub professionals: Arc<Mutex<Vec<Professional>>>,
}

impl InMemoryProfessionalRepo {
    pub fn new() -> Self {
        Self {
            professionals: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn with_professional(id: i32, email: &str, senha: &str) -> Self {
        let repo = Self::new();
        repo.professionals.lock().unwrap().push(Professional {
            id,
            nome: format!("Profissional {id}"),
            email: email.to_owned(),
            senha: senha.to_owned(),
            telefone: None,
            criado_em: Utc::now(),
        });
        repo
    }

    pub fn handle(&self) -> Arc<Mutex<Vec<Professional>>> {
        Arc::clone(&self.professionals)
    }
}

impl Clone for InMemoryProfessionalRepo {
    fn clone(&self) -> Self {
        Self {
            professionals: Arc::clone(&self.professionals),
        }
    }
}

impl ProfessionalRepository for InMemoryProfessionalRepo {
    async fn find_by_id(&self, id: i32) -> Result<Option<Professional>, ApiError> {
        Ok(self
            .professionals
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Professional>, ApiError> {
        Ok(self
            .professionals
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.email == email)
            .cloned())
    }

    async fn create(&self, new: &NewProfessional) -> Result<Professional, ApiError> {
        let mut professionals = self.professionals.lock().unwrap();
        // Unique email index stand-in.
        if professionals.iter().any(|p| p.email == new.email) {
            return Err(ApiError::EmailTaken);
        }
        let professional = Professional {
            id: professionals.len() as i32 + 1,
            nome: new.nome.clone(),
            email: new.email.clone(),
            senha: new.senha.clone(),
            telefone: new.telefone.clone(),
            criado_em: Utc::now(),
        };
        professionals.push(professional.clone());
        Ok(professional)
    }

    async fn update_senha(&self, id: i32, senha: &str) -> Result<(), ApiError> {
        let mut professionals = self.professionals.lock().unwrap();
        if let Some(p) = professionals.iter_mut().find(|p| p.id == id) {
            p.senha = senha.to_owned();
        }
        Ok(())
    }
}
