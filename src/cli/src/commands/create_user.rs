//! Create-user command.

use super::finish;
use crate::errors::CommandError;
use crate::home::Home;

/// Runs the create-user command.
pub async fn run(home: &mut Home) -> Result<String, CommandError> {
    let status = home.create_user.submit().await;
    finish(status, home.create_user.response_message())
}
