//! Terminal front-end for the Tiny Token ledger API.

pub mod commands;
pub mod config;
pub mod errors;
pub mod home;
pub mod notifier;
pub mod widgets;

// Re-export commonly used types
pub use config::FrontendConfig;
pub use errors::CommandError;
pub use home::Home;
pub use notifier::{MemoryNotifier, Notifier, TerminalNotifier};
pub use widgets::{CreateUserWidget, SubmitStatus, TransferTokensWidget, UserDetailsWidget};
