pub mod clients;
pub mod professionals;
pub mod submit;
