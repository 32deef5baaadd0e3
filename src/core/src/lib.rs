//! Core data model for the Tiny Token front-end.
//!
//! This crate provides the types exchanged with the ledger API and the
//! user-facing messages every widget renders from them.

pub mod errors;
pub mod messages;
pub mod types;

// Re-export commonly used types
pub use errors::CoreError;
pub use types::{Balance, Scalar, TransferId, TransferRequest, TransferResult, User, UserId};
