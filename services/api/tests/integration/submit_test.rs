use serde_json::json;

use anamnese_api::error::ApiError;
use anamnese_api::usecase::submit::{SubmitAnamneseInput, SubmitAnamneseUseCase};
use anamnese_testing::fixture::{VALID_CPF, VALID_CPF_ALT, VALID_CPF_FORMATTED, submission};

use crate::helpers::{InMemoryProfessionalRepo, InMemoryRecordRepo};

fn usecase(
    records: &InMemoryRecordRepo,
    professionals: &InMemoryProfessionalRepo,
) -> SubmitAnamneseUseCase<InMemoryRecordRepo, InMemoryProfessionalRepo> {
    SubmitAnamneseUseCase {
        records: records.clone(),
        professionals: professionals.clone(),
    }
}

fn input(nome: &str, cpf: &str) -> SubmitAnamneseInput {
    SubmitAnamneseInput {
        submission: submission(nome, cpf),
        authenticated_professional: None,
    }
}

#[tokio::test]
async fn should_store_mapped_record_and_assign_id() {
    let records = InMemoryRecordRepo::new();
    let professionals = InMemoryProfessionalRepo::new();
    let handle = records.records_handle();

    let out = usecase(&records, &professionals)
        .execute(input("  Maria da Silva ", VALID_CPF_FORMATTED))
        .await
        .unwrap();
    assert_eq!(out.id, 1);
    assert_eq!(out.professional_id, None);

    let stored = handle.lock().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].nome, "Maria da Silva");
    assert_eq!(stored[0].cpf, VALID_CPF);
    assert_eq!(stored[0].termos, "S");
    assert_eq!(stored[0].dados_cliente["celular"], "(11) 97777-1234");
    assert_eq!(stored[0].info_tattoo["declaracoes"]["seguirCuidados"], true);
}

#[tokio::test]
async fn should_enforce_cpf_uniqueness_per_professional_scope() {
    let records = InMemoryRecordRepo::new();
    let professionals = InMemoryProfessionalRepo::with_professional(1, "p1@example.com", "segredo1");
    professionals
        .handle()
        .lock()
        .unwrap()
        .push(anamnese_api::domain::types::Professional {
            id: 2,
            nome: "Profissional 2".to_owned(),
            email: "p2@example.com".to_owned(),
            senha: "segredo2".to_owned(),
            telefone: None,
            criado_em: chrono::Utc::now(),
        });
    let uc = usecase(&records, &professionals);

    // First submission for (cpf, professional 1) is accepted.
    let mut first = input("Ana", VALID_CPF);
    first.submission.professional_id = json!(1);
    uc.execute(first).await.unwrap();

    // Same pair again is a duplicate.
    let mut second = input("Ana", VALID_CPF);
    second.submission.professional_id = json!(1);
    let result = uc.execute(second).await;
    assert!(matches!(result, Err(ApiError::DuplicateCpf)));

    // Same CPF under professional 2 is its own scope.
    let mut third = input("Ana", VALID_CPF);
    third.submission.professional_id = json!(2);
    let out = uc.execute(third).await.unwrap();
    assert_eq!(out.professional_id, Some(2));
}

#[tokio::test]
async fn should_scope_unattributed_records_together() {
    let records = InMemoryRecordRepo::new();
    let professionals = InMemoryProfessionalRepo::new();
    let uc = usecase(&records, &professionals);

    uc.execute(input("Ana", VALID_CPF)).await.unwrap();
    let result = uc.execute(input("Ana de Novo", VALID_CPF)).await;
    assert!(matches!(result, Err(ApiError::DuplicateCpf)));

    // A different CPF is fine.
    uc.execute(input("Bia", VALID_CPF_ALT)).await.unwrap();
}

#[tokio::test]
async fn should_reject_racing_duplicate_at_insert_time() {
    // Both submissions pass the probe (blind), the second must still fail
    // on the unique constraint.
    let records = InMemoryRecordRepo::with_blind_probe();
    let professionals = InMemoryProfessionalRepo::new();
    let uc = usecase(&records, &professionals);

    uc.execute(input("Ana", VALID_CPF)).await.unwrap();
    let result = uc.execute(input("Ana", VALID_CPF)).await;
    assert!(matches!(result, Err(ApiError::DuplicateCpf)));
    assert_eq!(records.records_handle().lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_reject_unknown_payload_professional() {
    let records = InMemoryRecordRepo::new();
    let professionals = InMemoryProfessionalRepo::new();
    let mut bad = input("Ana", VALID_CPF);
    bad.submission.professional_id = json!(99);
    let result = usecase(&records, &professionals).execute(bad).await;
    assert!(matches!(result, Err(ApiError::UnknownProfessional)));
    assert!(records.records_handle().lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_reject_token_payload_mismatch_without_insert() {
    let records = InMemoryRecordRepo::new();
    let professionals = InMemoryProfessionalRepo::with_professional(1, "p1@example.com", "segredo1");
    let mut mismatched = input("Ana", VALID_CPF);
    mismatched.submission.professional_id = json!(1);
    mismatched.authenticated_professional = Some(7);
    let result = usecase(&records, &professionals).execute(mismatched).await;
    assert!(matches!(result, Err(ApiError::ProfessionalMismatch)));
    assert!(records.records_handle().lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_store_termos_n_when_a_declaration_is_missing() {
    let records = InMemoryRecordRepo::new();
    let professionals = InMemoryProfessionalRepo::new();
    let handle = records.records_handle();

    let mut refused = input("Ana", VALID_CPF);
    refused.submission.declaracoes["condicoesHigienicas"] = json!(false);
    usecase(&records, &professionals)
        .execute(refused)
        .await
        .unwrap();
    assert_eq!(handle.lock().unwrap()[0].termos, "N");
}
