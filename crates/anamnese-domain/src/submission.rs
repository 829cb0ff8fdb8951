//! Wire shape of a client-submitted anamnese form.
//!
//! The form frontends historically sent loosely-typed payloads (numbers for
//! ages, missing sections, arrays where objects belong), so every field is
//! accepted as raw JSON and shape-coerced in one place. Nothing here
//! rejects a submission — required-field and CPF checks happen in the
//! submission workflow.

use serde::Deserialize;
use serde_json::{Map, Value};

/// A raw anamnese submission as received from the form.
///
/// Field names follow the form's camelCase keys. Absent fields deserialize
/// to `Value::Null` and coerce to their empty defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnamneseSubmission {
    // Dados pessoais
    pub nome: Value,
    pub endereco: Value,
    pub rg: Value,
    pub cpf: Value,
    pub data_nascimento: Value,
    pub idade: Value,
    pub como_nos_conheceu: Value,
    pub telefone: Value,
    pub celular: Value,
    pub email: Value,

    // Avaliação médica
    pub avaliacao_medica: Value,
    pub outras_questoes_medicas: Value,
    pub outro_problema: Value,
    pub tipo_sanguineo: Value,

    // Consentimento
    pub declaracoes: Value,
    pub aceite_termos: Value,

    // Procedimento (preenchido pelo profissional)
    pub procedimento: Value,

    // Atribuição opcional a um profissional
    pub professional_id: Value,
}

/// Coerce a scalar JSON value to the string stored in the record.
///
/// Strings pass through, numbers and booleans are rendered, everything
/// else (null, objects, arrays) becomes the empty string. Storage never
/// holds null scalars.
pub fn coerce_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// Coerce a JSON value to a plain object. Arrays are rejected and replaced
/// with `{}`, same as null, scalars and missing fields.
pub fn coerce_object(value: &Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map.clone(),
        _ => Map::new(),
    }
}

/// A consent flag is set only by a literal JSON `true`.
pub fn coerce_flag(value: &Value) -> bool {
    matches!(value, Value::Bool(true))
}

/// Extract an optional professional id from a raw payload value.
///
/// Accepts a positive integer, numeric (`42`) or numeric-string (`"42"`).
/// Zero, negatives, fractions and other shapes are treated as absent —
/// never an error at this layer; the submission workflow decides whether
/// an absent id is acceptable.
pub fn coerce_professional_id(value: &Value) -> Option<i32> {
    let id = match value {
        Value::Number(n) => n.as_i64()?,
        Value::String(s) => s.trim().parse::<i64>().ok()?,
        _ => return None,
    };
    (id > 0 && id <= i64::from(i32::MAX)).then_some(id as i32)
}
