use std::sync::Mutex;

use crate::{info, success};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: Level,
    pub message: String,
}

/// Sink for transient user notifications.
///
/// Views report every user-facing outcome here and never print directly.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn notify(&self, level: Level, message: &str);
}

/// Prints notifications with the same markers as the rest of the CLI output.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, level: Level, message: &str) {
        match level {
            Level::Success => success!("{}", message),
            Level::Info => info!("{}", message),
            // not `error!`, which exits
            Level::Error => {
                use colored::Colorize;
                println!("[{}] {}", "!".red().bold(), message);
            }
        }
    }
}

/// Keeps notifications in memory so a page can render them.
#[derive(Default)]
pub struct CollectingNotifier {
    entries: Mutex<Vec<Notification>>,
}

impl CollectingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains everything collected so far.
    pub fn take(&self) -> Vec<Notification> {
        match self.entries.lock() {
            Ok(mut entries) => std::mem::take(&mut *entries),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl Notifier for CollectingNotifier {
    fn notify(&self, level: Level, message: &str) {
        let entry = Notification {
            level,
            message: message.to_string(),
        };
        match self.entries.lock() {
            Ok(mut entries) => entries.push(entry),
            Err(poisoned) => poisoned.into_inner().push(entry),
        }
    }
}
