//! Test utilities for the anamnese services.
//!
//! Provides canonical form-submission fixtures and known-good CPFs.
//! Import in `#[cfg(test)]` blocks and `tests/` targets only — never in
//! production code.

pub mod fixture;
