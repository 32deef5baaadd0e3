//! HTTP client for the Tiny Token ledger API.
//!
//! This crate sends the three requests the front-end makes and classifies each
//! response by status code into an operation-specific outcome.

pub mod api;
pub mod errors;
pub mod types;

// Re-export commonly used types
pub use api::{HttpLedgerClient, LedgerApi};
pub use errors::ClientError;
pub use types::{TransferOutcome, UserDetailsOutcome};
