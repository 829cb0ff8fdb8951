use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

use anamnese_auth_types::identity::SessionIdentity;
use anamnese_core::envelope::ApiResponse;
use anamnese_domain::submission::AnamneseSubmission;

use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::submit::{SubmitAnamneseInput, SubmitAnamneseUseCase};

// ── POST /anamnese-submissions ───────────────────────────────────────────────

#[derive(Serialize)]
pub struct SubmissionData {
    pub id: i32,
    #[serde(rename = "professionalId", skip_serializing_if = "Option::is_none")]
    pub professional_id: Option<i32>,
}

pub async fn submit_anamnese(
    identity: SessionIdentity,
    State(state): State<AppState>,
    Json(body): Json<AnamneseSubmission>,
) -> Result<(StatusCode, Json<ApiResponse<SubmissionData>>), ApiError> {
    let usecase = SubmitAnamneseUseCase {
        records: state.client_record_repo(),
        professionals: state.professional_repo(),
    };
    let out = usecase
        .execute(SubmitAnamneseInput {
            submission: body,
            authenticated_professional: identity.professional_id(),
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(
            "Ficha de anamnese salva com sucesso!",
            SubmissionData {
                id: out.id,
                professional_id: out.professional_id,
            },
        )),
    ))
}
