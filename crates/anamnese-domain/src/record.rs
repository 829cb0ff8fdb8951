//! Mapping from a raw form submission to the stored record shape.
//!
//! The store keeps three JSON documents per record (`dados_cliente`,
//! `avaliacao`, `info_tattoo`) plus flat columns. The mapper is pure; the
//! repository stamps `data_preenchimento_ficha` and assigns the id at
//! insert time.

use serde_json::{Value, json};

use crate::cpf;
use crate::submission::{
    AnamneseSubmission, coerce_flag, coerce_object, coerce_string,
};

/// Overall consent marker stored in the `termos` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termos {
    Aceitos,
    NaoAceitos,
}

impl Termos {
    /// Single-character column value: `"S"` or `"N"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Aceitos => "S",
            Self::NaoAceitos => "N",
        }
    }
}

/// A mapped record ready for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewClientRecord {
    pub nome: String,
    pub cpf: String,
    pub dados_cliente: Value,
    pub avaliacao: Value,
    pub info_tattoo: Value,
    pub termos: Termos,
    pub id_profissional: Option<i32>,
}

/// Assemble the nested document shape the store expects.
///
/// `nome` is trimmed and `cpf` normalized to digits; every scalar lands as
/// a string and every section as an object (see the coercion rules in
/// [`crate::submission`]). `professional_id` is the id already resolved by
/// the submission workflow, stored verbatim.
pub fn map_to_storage(
    submission: &AnamneseSubmission,
    professional_id: Option<i32>,
) -> NewClientRecord {
    let dados_cliente = json!({
        "endereco": coerce_string(&submission.endereco),
        "rg": coerce_string(&submission.rg),
        "dataNascimento": coerce_string(&submission.data_nascimento),
        "idade": coerce_string(&submission.idade),
        "comoNosConheceu": coerce_object(&submission.como_nos_conheceu),
        "telefone": coerce_string(&submission.telefone),
        "celular": coerce_string(&submission.celular),
        "email": coerce_string(&submission.email),
    });

    let avaliacao = json!({
        "avaliacaoMedica": coerce_object(&submission.avaliacao_medica),
        "outrasQuestoesMedicas": coerce_object(&submission.outras_questoes_medicas),
        "outroProblema": coerce_string(&submission.outro_problema),
        "tipoSanguineo": coerce_string(&submission.tipo_sanguineo),
    });

    let info_tattoo = json!({
        "procedimento": coerce_object(&submission.procedimento),
        "declaracoes": coerce_object(&submission.declaracoes),
    });

    NewClientRecord {
        nome: coerce_string(&submission.nome).trim().to_owned(),
        cpf: cpf::normalize(&coerce_string(&submission.cpf)),
        dados_cliente,
        avaliacao,
        info_tattoo,
        termos: derive_termos(&submission.aceite_termos, &submission.declaracoes),
        id_profissional: professional_id,
    }
}

/// `Aceitos` only when the overall terms were accepted AND the declarations
/// section is an object whose every value is a literal `true`. An empty
/// declarations object counts as all-true; a missing one does not.
fn derive_termos(aceite_termos: &Value, declaracoes: &Value) -> Termos {
    let accepted = coerce_flag(aceite_termos)
        && matches!(declaracoes, Value::Object(map) if map.values().all(|v| v == &Value::Bool(true)));
    if accepted {
        Termos::Aceitos
    } else {
        Termos::NaoAceitos
    }
}
