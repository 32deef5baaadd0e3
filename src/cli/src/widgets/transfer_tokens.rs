//! Transfer-tokens form.

use super::{report_connectivity_failure, SubmitStatus};
use crate::config::FrontendConfig;
use crate::notifier::Notifier;
use std::sync::Arc;
use tinytoken_client::{LedgerApi, TransferOutcome};
use tinytoken_core::messages;
use tinytoken_core::types::TransferRequest;
use tracing::{info, warn};

/// Moves tokens between two users.
pub struct TransferTokensWidget {
    api: Arc<dyn LedgerApi>,
    notifier: Arc<dyn Notifier>,
    base_url: String,
    transfer: TransferRequest,
    response_message: String,
}

impl TransferTokensWidget {
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
            transfer: TransferRequest::default(),
            response_message: String::new(),
        }
    }

    /// Mirrors the sender input field.
    pub fn set_user_id_from(&mut self, user_id: impl Into<String>) {
        self.transfer.user_id_from = user_id.into();
    }

    /// Mirrors the recipient input field.
    pub fn set_user_id_to(&mut self, user_id: impl Into<String>) {
        self.transfer.user_id_to = user_id.into();
    }

    /// Mirrors the amount input field.
    pub fn set_amount(&mut self, amount: impl Into<String>) {
        self.transfer.amount = amount.into();
    }

    /// Current form values.
    pub fn transfer(&self) -> &TransferRequest {
        &self.transfer
    }

    /// Message shown below the form; empty unless the last transfer went through.
    pub fn response_message(&self) -> &str {
        &self.response_message
    }

    /// Submits the form with the current field values.
    pub async fn submit(&mut self) -> SubmitStatus {
        let request = self.transfer.clone();
        info!("Submitting {}", request);

        match self.api.transfer(&request).await {
            Ok(TransferOutcome::Transferred(result)) => {
                info!("Transfer {} booked", result.transfer_id);
                self.response_message = messages::transfer_succeeded(&request, &result);
                SubmitStatus::Succeeded
            }
            Ok(TransferOutcome::Rejected { reason }) => {
                let reason = messages::transfer_failure_reason(&reason);
                warn!("Backend rejected {}: {}", request, reason);
                self.response_message.clear();
                self.notifier.alert(&messages::transfer_failed(&reason));
                SubmitStatus::Rejected
            }
            Err(e) => {
                self.response_message.clear();
                report_connectivity_failure(
                    self.notifier.as_ref(),
                    "transfer tokens",
                    &self.base_url,
                    &e,
                )
            }
        }
    }

    /// Renders the card as text.
    pub fn render(&self) -> String {
        let mut card = format!(
            "[ Transfer Tokens ]\nFrom User with ID: {}\nTo User with ID: {}\nAmount: {}\n",
            self.transfer.user_id_from, self.transfer.user_id_to, self.transfer.amount
        );
        if !self.response_message.is_empty() {
            card.push_str(&self.response_message);
            card.push('\n');
        }
        card
    }
}
