//! Core types for the Tiny Token front-end.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A value the ledger API may send either as a JSON number or as a string.
///
/// Ids and balances are never interpreted on this side of the wire, so the
/// only thing that matters is that they display the way the backend sent them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// A numeric value, e.g. `1` or `100`.
    Number(serde_json::Number),
    /// An opaque string value.
    Text(String),
}

/// Identifier of a user, as issued by the backend.
pub type UserId = Scalar;

/// Token balance of a user.
pub type Balance = Scalar;

/// Identifier of a completed transfer.
pub type TransferId = Scalar;

impl Scalar {
    /// Returns true for an empty text value, the state of an untouched form field.
    pub fn is_empty(&self) -> bool {
        matches!(self, Scalar::Text(text) if text.is_empty())
    }
}

impl Default for Scalar {
    fn default() -> Self {
        Scalar::Text(String::new())
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(number) => write!(f, "{}", number),
            Scalar::Text(text) => f.write_str(text),
        }
    }
}

impl From<u64> for Scalar {
    fn from(value: u64) -> Self {
        Scalar::Number(value.into())
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Number(value.into())
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

/// Read-only projection of a user account as reported by the backend.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// The user's id
    pub user_id: UserId,
    /// The user's token balance
    pub balance: Balance,
}

impl User {
    /// Creates a user projection from an id and a balance.
    pub fn new(user_id: impl Into<UserId>, balance: impl Into<Balance>) -> Self {
        Self {
            user_id: user_id.into(),
            balance: balance.into(),
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User {{ id: {}, balance: {} }}", self.user_id, self.balance)
    }
}

/// Body of a `POST /transactions` request.
///
/// Fields are kept exactly as typed into the form; the backend owns validation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    /// The sender's user id
    pub user_id_from: String,
    /// The recipient's user id
    pub user_id_to: String,
    /// The amount to transfer
    pub amount: String,
}

impl TransferRequest {
    /// Creates a transfer request from raw form values.
    pub fn new(
        user_id_from: impl Into<String>,
        user_id_to: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            user_id_from: user_id_from.into(),
            user_id_to: user_id_to.into(),
            amount: amount.into(),
        }
    }
}

impl fmt::Display for TransferRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Transfer {{ from: {}, to: {}, amount: {} }}",
            self.user_id_from, self.user_id_to, self.amount
        )
    }
}

/// Successful response of a `POST /transactions` request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferResult {
    /// The id the backend assigned to the transfer
    pub transfer_id: TransferId,
}
