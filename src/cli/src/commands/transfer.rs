//! Transfer command.

use super::finish;
use crate::errors::CommandError;
use crate::home::Home;

/// Runs the transfer command with the given form values.
pub async fn run(
    home: &mut Home,
    from: &str,
    to: &str,
    amount: &str,
) -> Result<String, CommandError> {
    let widget = &mut home.transfer_tokens;
    widget.set_user_id_from(from);
    widget.set_user_id_to(to);
    widget.set_amount(amount);

    let status = widget.submit().await;
    finish(status, widget.response_message())
}
