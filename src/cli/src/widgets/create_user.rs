//! Create-user form.

use super::{report_connectivity_failure, SubmitStatus};
use crate::config::FrontendConfig;
use crate::notifier::Notifier;
use std::sync::Arc;
use tinytoken_client::LedgerApi;
use tinytoken_core::messages;
use tracing::info;

/// Creates a user with the backend's default balance.
pub struct CreateUserWidget {
    api: Arc<dyn LedgerApi>,
    notifier: Arc<dyn Notifier>,
    base_url: String,
    default_balance: Option<String>,
    response_message: String,
}

impl CreateUserWidget {
    /// Creates the widget.
    pub fn new(
        config: &FrontendConfig,
        api: Arc<dyn LedgerApi>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            api,
            notifier,
            base_url: config.api_url.clone(),
            default_balance: config.default_balance.clone(),
            response_message: String::new(),
        }
    }

    /// Message shown below the form; empty until a user has been created.
    pub fn response_message(&self) -> &str {
        &self.response_message
    }

    /// Submits the form.
    pub async fn submit(&mut self) -> SubmitStatus {
        info!("Creating a new user");

        match self.api.create_user().await {
            Ok(user_id) => {
                info!("Created user {}", user_id);
                self.response_message = messages::user_created(&user_id);
                SubmitStatus::Succeeded
            }
            Err(e) => {
                self.response_message.clear();
                report_connectivity_failure(
                    self.notifier.as_ref(),
                    "create a new user",
                    &self.base_url,
                    &e,
                )
            }
        }
    }

    /// Renders the card as text.
    pub fn render(&self) -> String {
        let mut card = String::from("[ Create a New User ]\n");
        if let Some(balance) = &self.default_balance {
            card.push_str(&format!(
                "Create a new user with the default balance of {}.\n",
                balance
            ));
        }
        if !self.response_message.is_empty() {
            card.push_str(&self.response_message);
            card.push('\n');
        }
        card
    }
}
