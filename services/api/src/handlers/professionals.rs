use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};

use anamnese_auth_types::identity::SessionIdentity;
use anamnese_core::envelope::ApiResponse;

use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::professionals::{
    CheckEmailUseCase, CheckSessionUseCase, LoginInput, LoginUseCase, ResetPasswordInput,
    ResetPasswordUseCase, SignupInput, SignupProfessionalUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ProfessionalData {
    pub id: i32,
    pub nome: String,
    pub email: String,
}

// ── POST /professionals ──────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub nome: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub senha: String,
    pub telefone: Option<String>,
}

pub async fn signup_professional(
    State(state): State<AppState>,
    Json(body): Json<SignupRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ProfessionalData>>), ApiError> {
    let usecase = SignupProfessionalUseCase {
        professionals: state.professional_repo(),
    };
    let professional = usecase
        .execute(SignupInput {
            nome: body.nome,
            email: body.email,
            senha: body.senha,
            telefone: body.telefone,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(
            "Conta criada com sucesso!",
            ProfessionalData {
                id: professional.id,
                nome: professional.nome,
                email: professional.email,
            },
        )),
    ))
}

// ── POST /professionals/session ──────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub senha: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
    pub data: ProfessionalData,
}

pub async fn login_professional(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let usecase = LoginUseCase {
        professionals: state.professional_repo(),
    };
    let out = usecase
        .execute(LoginInput {
            email: body.email,
            senha: body.senha,
        })
        .await?;
    Ok(Json(LoginResponse {
        success: true,
        message: "Autenticação realizada com sucesso!".to_owned(),
        token: out.token,
        data: ProfessionalData {
            id: out.professional.id,
            nome: out.professional.nome,
            email: out.professional.email,
        },
    }))
}

// ── GET /professionals/session ───────────────────────────────────────────────

#[derive(Serialize)]
pub struct CheckSessionResponse {
    pub success: bool,
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ProfessionalData>,
}

/// Unlike the other endpoints, an invalid session answers with the
/// `authenticated: false` body the frontend polls for, not the error
/// envelope.
pub async fn check_session(
    identity: SessionIdentity,
    State(state): State<AppState>,
) -> axum::response::Response {
    let usecase = CheckSessionUseCase {
        professionals: state.professional_repo(),
    };
    match usecase.execute(identity.token).await {
        Ok(professional) => Json(CheckSessionResponse {
            success: true,
            authenticated: true,
            data: Some(ProfessionalData {
                id: professional.id,
                nome: professional.nome,
                email: professional.email,
            }),
        })
        .into_response(),
        Err(ApiError::InvalidToken) => (
            StatusCode::UNAUTHORIZED,
            Json(CheckSessionResponse {
                success: false,
                authenticated: false,
                data: None,
            }),
        )
            .into_response(),
        Err(other) => other.into_response(),
    }
}

// ── POST /professionals/password ─────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ResetPasswordRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default, rename = "novaSenha")]
    pub nova_senha: String,
}

pub async fn reset_password(
    State(state): State<AppState>,
    Json(body): Json<ResetPasswordRequest>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let usecase = ResetPasswordUseCase {
        professionals: state.professional_repo(),
    };
    usecase
        .execute(ResetPasswordInput {
            email: body.email,
            nova_senha: body.nova_senha,
        })
        .await?;
    Ok(Json(ApiResponse::message("Senha redefinida com sucesso!")))
}

// ── POST /professionals/email-check ──────────────────────────────────────────

#[derive(Deserialize)]
pub struct EmailCheckRequest {
    #[serde(default)]
    pub email: String,
}

#[derive(Serialize)]
pub struct EmailCheckResponse {
    pub success: bool,
    pub message: String,
    pub exists: bool,
}

pub async fn check_email(
    State(state): State<AppState>,
    Json(body): Json<EmailCheckRequest>,
) -> Result<Json<EmailCheckResponse>, ApiError> {
    let usecase = CheckEmailUseCase {
        professionals: state.professional_repo(),
    };
    let exists = usecase.execute(&body.email).await?;
    let message = if exists {
        "E-mail já cadastrado"
    } else {
        "E-mail disponível"
    };
    Ok(Json(EmailCheckResponse {
        success: true,
        message: message.to_owned(),
        exists,
    }))
}
