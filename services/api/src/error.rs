use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// API error taxonomy. User-facing messages are the Portuguese strings the
/// web frontend already displays.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Nome e CPF são obrigatórios")]
    MissingFields,
    #[error("CPF inválido")]
    InvalidCpf,
    #[error("Informe um CPF ou um id para a consulta")]
    MissingCpfQuery,
    #[error("Identificador de cliente inválido")]
    InvalidClientId,
    #[error("Profissional não encontrado")]
    UnknownProfessional,
    #[error("Profissional informado não corresponde ao profissional autenticado")]
    ProfessionalMismatch,
    #[error("Já existe uma ficha de anamnese preenchida para este CPF")]
    DuplicateCpf,
    #[error("Parâmetros de consulta inválidos")]
    InvalidQuery,
    #[error("Nome, e-mail e senha são obrigatórios")]
    MissingSignupFields,
    #[error("E-mail e senha são obrigatórios")]
    MissingCredentials,
    #[error("A senha deve ter pelo menos 6 caracteres")]
    PasswordTooShort,
    #[error("E-mail já cadastrado")]
    EmailTaken,
    #[error("E-mail ou senha incorretos")]
    InvalidCredentials,
    #[error("Autenticação necessária")]
    InvalidToken,
    #[error("E-mail não encontrado")]
    EmailNotFound,
    #[error("Erro ao acessar o banco de dados. Tente novamente.")]
    Storage(#[from] anyhow::Error),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingFields => "MISSING_FIELDS",
            Self::InvalidCpf => "INVALID_CPF",
            Self::MissingCpfQuery => "MISSING_CPF_QUERY",
            Self::InvalidClientId => "INVALID_CLIENT_ID",
            Self::UnknownProfessional => "UNKNOWN_PROFESSIONAL",
            Self::ProfessionalMismatch => "PROFESSIONAL_MISMATCH",
            Self::DuplicateCpf => "DUPLICATE_CPF",
            Self::InvalidQuery => "INVALID_QUERY",
            Self::MissingSignupFields => "MISSING_SIGNUP_FIELDS",
            Self::MissingCredentials => "MISSING_CREDENTIALS",
            Self::PasswordTooShort => "PASSWORD_TOO_SHORT",
            Self::EmailTaken => "EMAIL_TAKEN",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::EmailNotFound => "EMAIL_NOT_FOUND",
            Self::Storage(_) => "STORAGE",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::MissingFields
            | Self::InvalidCpf
            | Self::MissingCpfQuery
            | Self::InvalidClientId
            | Self::UnknownProfessional
            | Self::DuplicateCpf
            | Self::InvalidQuery
            | Self::MissingSignupFields
            | Self::MissingCredentials
            | Self::PasswordTooShort
            | Self::EmailTaken => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials | Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::ProfessionalMismatch => StatusCode::FORBIDDEN,
            Self::EmailNotFound => StatusCode::NOT_FOUND,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        // Log 500s only — tower-http TraceLayer already records method/uri/status
        // for all requests. 4xx are expected client errors.
        let message = match &self {
            Self::Storage(e) => {
                tracing::error!(error = %e, kind = "STORAGE", "storage error");
                if cfg!(debug_assertions) {
                    format!("{self}: {e:#}")
                } else {
                    self.to_string()
                }
            }
            _ => self.to_string(),
        };
        let body = serde_json::json!({
            "success": false,
            "message": message,
        });
        (status, axum::Json(body)).into_response()
    }
}
