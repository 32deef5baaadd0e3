//! Forms bound to one ledger API operation each.
//!
//! A widget owns its form state, runs one request per submission and turns
//! the outcome into display state or a notification. Widgets share nothing
//! with each other.

pub mod create_user;
pub mod transfer_tokens;
pub mod user_details;

pub use create_user::CreateUserWidget;
pub use transfer_tokens::TransferTokensWidget;
pub use user_details::UserDetailsWidget;

use crate::notifier::Notifier;
use tinytoken_client::ClientError;
use tinytoken_core::messages;
use tracing::error;

/// How a submission ended, from the user's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    /// The backend accepted the request.
    Succeeded,
    /// The backend refused the input.
    Rejected,
    /// The backend could not be reached or answered unexpectedly.
    Failed,
}

/// Logs `error` and raises the generic connectivity notification.
fn report_connectivity_failure(
    notifier: &dyn Notifier,
    action: &str,
    base_url: &str,
    error: &ClientError,
) -> SubmitStatus {
    let message = messages::connectivity_failure(action, base_url);
    error!("Failed to {}: {}", action, error);
    notifier.alert(&message);
    SubmitStatus::Failed
}
