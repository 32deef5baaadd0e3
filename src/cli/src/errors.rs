//! Error types for the front-end commands.

use thiserror::Error;

/// Why a one-shot command did not succeed.
///
/// The user has already been notified by the widget when one of these is
/// returned; they only decide the process exit status.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// The backend refused the request as invalid.
    #[error("Request rejected by the backend")]
    Rejected,

    /// The backend could not be reached or answered unexpectedly.
    #[error("Could not complete the request against the backend")]
    Failed,
}
