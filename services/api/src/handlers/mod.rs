pub mod anamnese;
pub mod clients;
pub mod professionals;
