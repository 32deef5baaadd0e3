//! Commands for the front-end.

pub mod create_user;
pub mod init_config;
pub mod interactive;
pub mod transfer;
pub mod user_details;

use crate::errors::CommandError;
use crate::widgets::SubmitStatus;

/// Maps a widget submission to the command result.
fn finish(status: SubmitStatus, message: &str) -> Result<String, CommandError> {
    match status {
        SubmitStatus::Succeeded => Ok(message.to_string()),
        SubmitStatus::Rejected => Err(CommandError::Rejected),
        SubmitStatus::Failed => Err(CommandError::Failed),
    }
}
