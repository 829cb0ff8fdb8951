//! The anamnese submission workflow.

use anamnese_domain::cpf;
use anamnese_domain::record::map_to_storage;
use anamnese_domain::submission::{
    AnamneseSubmission, coerce_professional_id, coerce_string,
};

use crate::domain::repository::{ClientRecordRepository, ProfessionalRepository};
use crate::error::ApiError;

pub struct SubmitAnamneseInput {
    pub submission: AnamneseSubmission,
    /// Professional id carried by a valid bearer token, if any. A missing
    /// or malformed token is an anonymous submission, not an error.
    pub authenticated_professional: Option<i32>,
}

#[derive(Debug)]
pub struct SubmitAnamneseOutput {
    pub id: i32,
    pub professional_id: Option<i32>,
}

pub struct SubmitAnamneseUseCase<C: ClientRecordRepository, P: ProfessionalRepository> {
    pub records: C,
    pub professionals: P,
}

impl<C: ClientRecordRepository, P: ProfessionalRepository> SubmitAnamneseUseCase<C, P> {
    /// Validate, resolve attribution, map and insert. Exactly one insert
    /// on success; every failure is terminal (no retries).
    pub async fn execute(
        &self,
        input: SubmitAnamneseInput,
    ) -> Result<SubmitAnamneseOutput, ApiError> {
        let submission = &input.submission;

        let nome = coerce_string(&submission.nome);
        let cpf_digits = cpf::normalize(&coerce_string(&submission.cpf));
        if nome.trim().is_empty() || cpf_digits.is_empty() {
            return Err(ApiError::MissingFields);
        }
        if !cpf::is_valid(&cpf_digits) {
            return Err(ApiError::InvalidCpf);
        }

        let professional_id = self
            .resolve_professional(
                coerce_professional_id(&submission.professional_id),
                input.authenticated_professional,
            )
            .await?;

        let record = map_to_storage(submission, professional_id);

        // Friendly pre-insert probe; the partial unique indexes are the
        // authoritative guard when two submissions race past it.
        if self
            .records
            .exists_in_scope(&record.cpf, professional_id)
            .await?
        {
            return Err(ApiError::DuplicateCpf);
        }

        let id = self.records.insert(&record).await?;
        Ok(SubmitAnamneseOutput {
            id,
            professional_id,
        })
    }

    /// An explicit payload id must reference an existing professional and,
    /// when a token is also present, match it. With no explicit id the
    /// token id wins; with neither the record stays unattributed.
    async fn resolve_professional(
        &self,
        explicit: Option<i32>,
        authenticated: Option<i32>,
    ) -> Result<Option<i32>, ApiError> {
        match explicit {
            Some(id) => {
                if self.professionals.find_by_id(id).await?.is_none() {
                    return Err(ApiError::UnknownProfessional);
                }
                if authenticated.is_some_and(|auth| auth != id) {
                    return Err(ApiError::ProfessionalMismatch);
                }
                Ok(Some(id))
            }
            None => Ok(authenticated),
        }
    }
}
