//! Per-operation outcomes of ledger API calls.

use tinytoken_core::types::{TransferResult, User};

/// Outcome of `GET /users/{id}` when the backend answered meaningfully.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserDetailsOutcome {
    /// 200: the user exists.
    Found(User),
    /// 400 or 404: the backend does not accept the id.
    InvalidId(u16),
}

/// Outcome of `POST /transactions` when the backend answered meaningfully.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransferOutcome {
    /// 200: the transfer was booked.
    Transferred(TransferResult),
    /// 400: the backend refused the transfer.
    Rejected {
        /// Plain-text response body, possibly empty
        reason: String,
    },
}
