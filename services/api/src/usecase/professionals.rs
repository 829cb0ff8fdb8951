//! Professional account flows: signup, login, session check, password
//! reset and email existence.

use chrono::Utc;

use anamnese_auth_types::token::{SessionToken, encode_session_token};

use crate::domain::repository::ProfessionalRepository;
use crate::domain::types::{NewProfessional, Professional};
use crate::error::ApiError;

/// Minimum accepted password length, in characters.
pub const MIN_SENHA_LEN: usize = 6;

fn senha_too_short(senha: &str) -> bool {
    senha.chars().count() < MIN_SENHA_LEN
}

// ── Signup ───────────────────────────────────────────────────────────────────

pub struct SignupInput {
    pub nome: String,
    pub email: String,
    pub senha: String,
    pub telefone: Option<String>,
}

pub struct SignupProfessionalUseCase<P: ProfessionalRepository> {
    pub professionals: P,
}

impl<P: ProfessionalRepository> SignupProfessionalUseCase<P> {
    pub async fn execute(&self, input: SignupInput) -> Result<Professional, ApiError> {
        let nome = input.nome.trim().to_owned();
        let email = input.email.trim().to_lowercase();
        if nome.is_empty() || email.is_empty() || input.senha.is_empty() {
            return Err(ApiError::MissingSignupFields);
        }
        if senha_too_short(&input.senha) {
            return Err(ApiError::PasswordTooShort);
        }
        // Friendly pre-check; the unique email index is the backstop.
        if self.professionals.find_by_email(&email).await?.is_some() {
            return Err(ApiError::EmailTaken);
        }
        let telefone = input
            .telefone
            .map(|t| t.trim().to_owned())
            .filter(|t| !t.is_empty());
        self.professionals
            .create(&NewProfessional {
                nome,
                email,
                senha: input.senha,
                telefone,
            })
            .await
    }
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub email: String,
    pub senha: String,
}

#[derive(Debug)]
pub struct LoginOutput {
    pub professional: Professional,
    pub token: String,
}

pub struct LoginUseCase<P: ProfessionalRepository> {
    pub professionals: P,
}

impl<P: ProfessionalRepository> LoginUseCase<P> {
    /// Unknown email and wrong password collapse into one undifferentiated
    /// 401 so the login form cannot be used to enumerate accounts.
    pub async fn execute(&self, input: LoginInput) -> Result<LoginOutput, ApiError> {
        let email = input.email.trim().to_lowercase();
        if email.is_empty() || input.senha.is_empty() {
            return Err(ApiError::MissingCredentials);
        }
        let professional = self
            .professionals
            .find_by_email(&email)
            .await?
            .ok_or(ApiError::InvalidCredentials)?;
        // Plaintext comparison, same as the system this replaces.
        if professional.senha != input.senha {
            return Err(ApiError::InvalidCredentials);
        }
        let token = encode_session_token(&SessionToken {
            id: professional.id,
            nome: professional.nome.clone(),
            email: professional.email.clone(),
            timestamp: Utc::now().timestamp_millis(),
        });
        Ok(LoginOutput {
            professional,
            token,
        })
    }
}

// ── Session check ────────────────────────────────────────────────────────────

pub struct CheckSessionUseCase<P: ProfessionalRepository> {
    pub professionals: P,
}

impl<P: ProfessionalRepository> CheckSessionUseCase<P> {
    /// A token only proves what it claims — re-check the professional
    /// still exists before trusting it.
    pub async fn execute(&self, token: Option<SessionToken>) -> Result<Professional, ApiError> {
        let token = token.ok_or(ApiError::InvalidToken)?;
        self.professionals
            .find_by_id(token.id)
            .await?
            .ok_or(ApiError::InvalidToken)
    }
}

// ── Password reset ───────────────────────────────────────────────────────────

pub struct ResetPasswordInput {
    pub email: String,
    pub nova_senha: String,
}

pub struct ResetPasswordUseCase<P: ProfessionalRepository> {
    pub professionals: P,
}

impl<P: ProfessionalRepository> ResetPasswordUseCase<P> {
    pub async fn execute(&self, input: ResetPasswordInput) -> Result<(), ApiError> {
        let email = input.email.trim().to_lowercase();
        if email.is_empty() || input.nova_senha.is_empty() {
            return Err(ApiError::MissingCredentials);
        }
        if senha_too_short(&input.nova_senha) {
            return Err(ApiError::PasswordTooShort);
        }
        let professional = self
            .professionals
            .find_by_email(&email)
            .await?
            .ok_or(ApiError::EmailNotFound)?;
        self.professionals
            .update_senha(professional.id, &input.nova_senha)
            .await
    }
}

// ── Email existence ──────────────────────────────────────────────────────────

pub struct CheckEmailUseCase<P: ProfessionalRepository> {
    pub professionals: P,
}

impl<P: ProfessionalRepository> CheckEmailUseCase<P> {
    pub async fn execute(&self, email: &str) -> Result<bool, ApiError> {
        let email = email.trim().to_lowercase();
        if email.is_empty() {
            return Ok(false);
        }
        Ok(self.professionals.find_by_email(&email).await?.is_some())
    }
}
