//! Session-token types shared by token issuing (login) and validation.

pub mod identity;
pub mod token;
