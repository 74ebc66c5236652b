//! Notification sink for player-facing log lines.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Severity of a notification.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Level {
    Info,
    Warn,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Info  => "info",
            Level::Warn  => "warn",
            Level::Error => "error",
        })
    }
}

/// One recorded notification.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Notice {
    pub level:   Level,
    pub message: String,
}

/// Receives the director's log and warning messages.
///
/// Only [`notify`](Self::notify) is required.  How messages reach the player
/// (a log window, a letter, stdout) is up to the implementor.
pub trait NotificationSink {
    fn notify(&mut self, level: Level, message: &str);

    fn info(&mut self, message: &str) {
        self.notify(Level::Info, message);
    }

    fn warn(&mut self, message: &str) {
        self.notify(Level::Warn, message);
    }

    fn error(&mut self, message: &str) {
        self.notify(Level::Error, message);
    }
}

/// Forwards notifications to `tracing` under the `reunion` target.
#[derive(Default, Debug, Clone, Copy)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&mut self, level: Level, message: &str) {
        match level {
            Level::Info  => tracing::info!(target: "reunion", "{message}"),
            Level::Warn  => tracing::warn!(target: "reunion", "{message}"),
            Level::Error => tracing::error!(target: "reunion", "{message}"),
        }
    }
}

/// Records notifications in memory.
///
/// Clones share the same buffer, so a test can keep one handle and give the
/// other to the session.
#[derive(Default, Debug, Clone)]
pub struct MemorySink {
    notices: Rc<RefCell<Vec<Notice>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }

    pub fn at_level(&self, level: Level) -> Vec<String> {
        self.notices
            .borrow()
            .iter()
            .filter(|n| n.level == level)
            .map(|n| n.message.clone())
            .collect()
    }

    /// `true` if any recorded message contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.notices.borrow().iter().any(|n| n.message.contains(needle))
    }

    pub fn len(&self) -> usize {
        self.notices.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.notices.borrow_mut().clear();
    }
}

impl NotificationSink for MemorySink {
    fn notify(&mut self, level: Level, message: &str) {
        self.notices.borrow_mut().push(Notice { level, message: message.to_owned() });
    }
}
