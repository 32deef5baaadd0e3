//! User-details form.

use super::{report_connectivity_failure, SubmitStatus};
use crate::config::FrontendConfig;
use crate::notifier::Notifier;
use std::sync::Arc;
use tinytoken_client::{LedgerApi, UserDetailsOutcome};
use tinytoken_core::messages;
use tinytoken_core::types::{Scalar, User};
use tracing::{info, warn};

/// Looks up a user's balance.
///
/// The displayed user doubles as the form state: the id field is the input,
/// and a successful lookup replaces both fields with what the backend sent.
pub struct UserDetailsWidget {
    api: Arc<dyn LedgerApi>,
    notifier: Arc<dyn Notifier>,
    base_url: String,
    user: User,
}

impl UserDetailsWidget {
    /// Creates the widget with empty fields.
    pub fn new(
        config: &FrontendConfig,
        api: Arc<dyn LedgerApi>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            api,
            notifier,
            base_url: config.api_url.clone(),
            user: User::default(),
        }
    }

    /// Mirrors the id input field.
    pub fn set_user_id(&mut self, user_id: impl Into<String>) {
        self.user.user_id = Scalar::Text(user_id.into());
    }

    /// Currently displayed user.
    pub fn user(&self) -> &User {
        &self.user
    }

    /// Submits the form with the id currently in the input field.
    pub async fn submit(&mut self) -> SubmitStatus {
        let user_id = self.user.user_id.to_string();
        info!("Fetching details for user {}", user_id);

        match self.api.user_details(&user_id).await {
            Ok(UserDetailsOutcome::Found(user)) => {
                info!("Fetched {}", user);
                self.user = user;
                SubmitStatus::Succeeded
            }
            Ok(UserDetailsOutcome::InvalidId(status)) => {
                warn!("Backend rejected user id {:?} with {}", user_id, status);
                self.notifier.alert(&messages::invalid_user_id());
                SubmitStatus::Rejected
            }
            Err(e) => report_connectivity_failure(
                self.notifier.as_ref(),
                &format!("fetch user details for user with ID {}", user_id),
                &self.base_url,
                &e,
            ),
        }
    }

    /// Renders the card as text.
    pub fn render(&self) -> String {
        format!(
            "[ Get User Details ]\nUser ID: {}\nBalance: {}\n",
            self.user.user_id, self.user.balance
        )
    }
}
