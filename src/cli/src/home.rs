//! The root page composing the three widgets.

use crate::config::FrontendConfig;
use crate::notifier::Notifier;
use crate::widgets::{CreateUserWidget, TransferTokensWidget, UserDetailsWidget};
use std::sync::Arc;
use tinytoken_client::LedgerApi;

/// Title rendered at the top of the page.
pub const TITLE: &str = "Tiny Token";

/// Root page. Each widget gets the same configuration and API handle and
/// nothing else in common.
pub struct Home {
    /// Create-user card
    pub create_user: CreateUserWidget,
    /// User-details card
    pub user_details: UserDetailsWidget,
    /// Transfer card
    pub transfer_tokens: TransferTokensWidget,
}

impl Home {
    /// Builds the page from configuration.
    pub fn new(
        config: &FrontendConfig,
        api: Arc<dyn LedgerApi>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            create_user: CreateUserWidget::new(config, api.clone(), notifier.clone()),
            user_details: UserDetailsWidget::new(config, api.clone(), notifier.clone()),
            transfer_tokens: TransferTokensWidget::new(config, api, notifier),
        }
    }

    /// Renders the whole page as text.
    pub fn render(&self) -> String {
        format!(
            "{}\n\n{}\n{}\n{}",
            TITLE,
            self.create_user.render(),
            self.user_details.render(),
            self.transfer_tokens.render()
        )
    }
}
