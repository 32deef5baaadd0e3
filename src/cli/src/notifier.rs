//! Blocking user notifications.

use colored::Colorize;
use std::sync::Mutex;

/// Surfaces a message the user has to see before the form continues.
pub trait Notifier: Send + Sync {
    /// Shows `message` to the user.
    fn alert(&self, message: &str);
}

/// Writes notifications to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn alert(&self, message: &str) {
        eprintln!("{}", message.red());
    }
}

/// Keeps notifications in memory, in the order they were raised.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    messages: Mutex<Vec<String>>,
}

impl MemoryNotifier {
    /// Creates an empty notifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every message raised so far.
    pub fn messages(&self) -> Vec<String> {
        match self.messages.lock() {
            Ok(messages) => messages.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Returns the most recent message, if any.
    pub fn last(&self) -> Option<String> {
        self.messages().pop()
    }
}

impl Notifier for MemoryNotifier {
    fn alert(&self, message: &str) {
        match self.messages.lock() {
            Ok(mut messages) => messages.push(message.to_string()),
            Err(poisoned) => poisoned.into_inner().push(message.to_string()),
        }
    }
}
