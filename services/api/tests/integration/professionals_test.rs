use anamnese_api::error::ApiError;
use anamnese_api::usecase::professionals::{
    CheckEmailUseCase, CheckSessionUseCase, LoginInput, LoginUseCase, ResetPasswordInput,
    ResetPasswordUseCase, SignupInput, SignupProfessionalUseCase,
};
use anamnese_auth_types::token::decode_session_token;

use crate::helpers::InMemoryProfessionalRepo;

fn signup_input(email: &str) -> SignupInput {
    SignupInput {
        nome: "Joana".to_owned(),
        email: email.to_owned(),
        senha: "segredo1".to_owned(),
        telefone: Some("(11) 95555-0000".to_owned()),
    }
}

#[tokio::test]
async fn should_signup_then_login_with_issued_token() {
    let repo = InMemoryProfessionalRepo::new();
    let created = SignupProfessionalUseCase {
        professionals: repo.clone(),
    }
    .execute(signup_input("joana@example.com"))
    .await
    .unwrap();

    let out = LoginUseCase {
        professionals: repo.clone(),
    }
    .execute(LoginInput {
        email: "joana@example.com".to_owned(),
        senha: "segredo1".to_owned(),
    })
    .await
    .unwrap();

    let claims = decode_session_token(&out.token).unwrap();
    assert_eq!(claims.id, created.id);
    assert_eq!(claims.nome, "Joana");
    assert_eq!(claims.email, "joana@example.com");

    // The token round-trips through the session check.
    let professional = CheckSessionUseCase {
        professionals: repo.clone(),
    }
    .execute(Some(claims))
    .await
    .unwrap();
    assert_eq!(professional.id, created.id);
}

#[tokio::test]
async fn should_reject_second_signup_with_same_email() {
    let repo = InMemoryProfessionalRepo::new();
    let uc = SignupProfessionalUseCase {
        professionals: repo.clone(),
    };
    uc.execute(signup_input("joana@example.com")).await.unwrap();
    let result = uc.execute(signup_input("joana@example.com")).await;
    assert!(matches!(result, Err(ApiError::EmailTaken)));
}

#[tokio::test]
async fn should_reset_password_and_invalidate_old_one() {
    let repo = InMemoryProfessionalRepo::with_professional(1, "joana@example.com", "antiga1");

    ResetPasswordUseCase {
        professionals: repo.clone(),
    }
    .execute(ResetPasswordInput {
        email: "joana@example.com".to_owned(),
        nova_senha: "novasenha".to_owned(),
    })
    .await
    .unwrap();

    let login = LoginUseCase {
        professionals: repo.clone(),
    };
    let old = login
        .execute(LoginInput {
            email: "joana@example.com".to_owned(),
            senha: "antiga1".to_owned(),
        })
        .await;
    assert!(matches!(old, Err(ApiError::InvalidCredentials)));

    login
        .execute(LoginInput {
            email: "joana@example.com".to_owned(),
            senha: "novasenha".to_owned(),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn should_report_email_existence_after_signup() {
    let repo = InMemoryProfessionalRepo::new();
    let check = CheckEmailUseCase {
        professionals: repo.clone(),
    };
    assert!(!check.execute("joana@example.com").await.unwrap());

    SignupProfessionalUseCase {
        professionals: repo.clone(),
    }
    .execute(signup_input("joana@example.com"))
    .await
    .unwrap();

    assert!(check.execute("joana@example.com").await.unwrap());
}
