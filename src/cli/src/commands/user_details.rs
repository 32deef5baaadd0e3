//! User-details command.

use super::finish;
use crate::errors::CommandError;
use crate::home::Home;

/// Runs the user-details command for `user_id`.
pub async fn run(home: &mut Home, user_id: &str) -> Result<String, CommandError> {
    home.user_details.set_user_id(user_id);
    let status = home.user_details.submit().await;

    let user = home.user_details.user();
    finish(
        status,
        &format!("User ID: {}, balance: {}", user.user_id, user.balance),
    )
}
