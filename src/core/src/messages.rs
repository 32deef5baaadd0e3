//! User-facing messages shared by all widgets.
//!
//! Every string a widget shows or raises as a notification is built here, so
//! the three forms word their outcomes consistently.

use crate::types::{TransferRequest, TransferResult, UserId};

/// Reason shown when the backend rejects a transfer without saying why.
pub const DEFAULT_TRANSFER_FAILURE_REASON: &str = "Bad request";

/// Message shown after a user has been created.
pub fn user_created(user_id: &UserId) -> String {
    format!("User Created Successfully. New user's id is: {}", user_id)
}

/// Notification raised when the backend answers 400/404 to a details lookup.
pub fn invalid_user_id() -> String {
    "Bad request. Probably User ID is invalid.".to_string()
}

/// Message shown after a transfer went through.
pub fn transfer_succeeded(request: &TransferRequest, result: &TransferResult) -> String {
    format!(
        "Transferred {} tokens from {} to {} successfully. Transfer ID: {}",
        request.amount, request.user_id_from, request.user_id_to, result.transfer_id
    )
}

/// Turns the plain-text body of a rejected transfer into a failure reason.
pub fn transfer_failure_reason(body: &str) -> String {
    if body.is_empty() {
        DEFAULT_TRANSFER_FAILURE_REASON.to_string()
    } else {
        body.to_string()
    }
}

/// Notification raised when the backend rejects a transfer.
pub fn transfer_failed(reason: &str) -> String {
    format!("Transfer failed: {}", reason)
}

/// Generic notification for network errors, undecodable bodies and unexpected statuses.
///
/// `action` completes the sentence "Failed to ...", e.g. `"create a new user"`.
pub fn connectivity_failure(action: &str, base_url: &str) -> String {
    format!(
        "Failed to {}.\nAre you connected to the correct API url?\n\
         Is backend running?\nYou are now using {}",
        action, base_url
    )
}
