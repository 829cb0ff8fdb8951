//! Canonical anamnese submissions for tests.

use anamnese_domain::submission::AnamneseSubmission;
use serde_json::{Value, json};

/// A known-valid CPF (passes both check digits).
pub const VALID_CPF: &str = "52998224725";

/// A second valid CPF, distinct from [`VALID_CPF`].
pub const VALID_CPF_ALT: &str = "11144477735";

/// [`VALID_CPF`] in the formatted shape users actually type.
pub const VALID_CPF_FORMATTED: &str = "529.982.247-25";

/// A complete, consenting form payload for `nome`/`cpf`.
///
/// All declaration flags are `true` and the overall terms are accepted, so
/// the mapped record carries `termos = "S"`. Tests mutate the returned
/// value to produce the shape they need.
pub fn submission_json(nome: &str, cpf: &str) -> Value {
    json!({
        "nome": nome,
        "endereco": "Rua Harmonia, 123",
        "rg": "22.333.444-5",
        "cpf": cpf,
        "dataNascimento": "1992-10-05",
        "idade": "32",
        "comoNosConheceu": {"instagram": true, "facebook": false, "outro": false, "indicacao": ""},
        "telefone": "",
        "celular": "(11) 97777-1234",
        "email": "cliente@example.com",
        "avaliacaoMedica": {
            "tratamentoMedico": {"sim": false, "nao": true, "especifique": ""},
            "diabetes": {"sim": false, "nao": true, "especifique": ""},
            "alergia": {"sim": false, "nao": true, "especifique": ""}
        },
        "outrasQuestoesMedicas": {"hipertensao": false, "gestante": false, "hemofilia": false},
        "outroProblema": "",
        "tipoSanguineo": "A+",
        "declaracoes": {
            "veracidadeInformacoes": true,
            "seguirCuidados": true,
            "permanenciaTatuagem": true,
            "condicoesHigienicas": true
        },
        "aceiteTermos": true,
        "procedimento": {
            "local": "ombro direito",
            "estilo": "old school",
            "observacoes": "",
            "profissional": "Joana",
            "data": "2025-09-15",
            "valor": "600"
        }
    })
}

/// [`submission_json`] parsed into the domain type.
pub fn submission(nome: &str, cpf: &str) -> AnamneseSubmission {
    serde_json::from_value(submission_json(nome, cpf)).expect("fixture deserializes")
}
