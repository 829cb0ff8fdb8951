use chrono::{DateTime, Utc};
use serde_json::Value;

use anamnese_domain::cpf;

/// A stored anamnese record, as read back from the store.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientRecord {
    pub id: i32,
    pub nome: String,
    pub cpf: String,
    pub dados_cliente: Value,
    pub avaliacao: Value,
    pub info_tattoo: Value,
    pub termos: String,
    pub data_preenchimento_ficha: DateTime<Utc>,
    pub id_profissional: Option<i32>,
}

/// Listing/autocomplete row: the flat columns plus the contact fields the
/// frontend shows, pulled out of the `dados_cliente` document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSummary {
    pub id: i32,
    pub nome: String,
    pub cpf: String,
    pub email: Option<String>,
    pub celular: Option<String>,
    pub data_nascimento: Option<String>,
}

impl ClientSummary {
    /// Build a summary row from the flat columns and the raw
    /// `dados_cliente` document. Blank extracted strings become `None`,
    /// which serializes as the `null` the frontend expects.
    pub fn from_parts(id: i32, nome: String, cpf: String, dados_cliente: &Value) -> Self {
        let field = |key: &str| {
            dados_cliente
                .get(key)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
        };
        Self {
            id,
            nome,
            cpf,
            email: field("email"),
            celular: field("celular"),
            data_nascimento: field("dataNascimento"),
        }
    }
}

/// A professional account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Professional {
    pub id: i32,
    pub nome: String,
    pub email: String,
    pub senha: String,
    pub telefone: Option<String>,
    pub criado_em: DateTime<Utc>,
}

/// Signup payload after validation, ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProfessional {
    pub nome: String,
    pub email: String,
    pub senha: String,
    pub telefone: Option<String>,
}

/// What an autocomplete query matches against.
///
/// A purely numeric query with at least 3 digits is assumed to be a CPF
/// fragment; everything else matches names case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchKey {
    Cpf(String),
    Nome(String),
}

impl SearchKey {
    /// Classify a free-text query. Returns `None` when the trimmed query
    /// is shorter than 2 characters — callers answer with an empty result
    /// set without touching the store.
    pub fn from_query(query: &str) -> Option<Self> {
        let trimmed = query.trim();
        if trimmed.chars().count() < 2 {
            return None;
        }
        let digits = cpf::normalize(trimmed);
        let only_numbers = trimmed.chars().all(|c| c.is_ascii_digit());
        if only_numbers && digits.len() >= 3 {
            Some(Self::Cpf(digits))
        } else {
            Some(Self::Nome(trimmed.to_lowercase()))
        }
    }
}
