//! Notice type and the notifier seam.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// A transient message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
    /// Overrides the notifier's default display time
    pub duration: Option<Duration>,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
            duration: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            duration: None,
        }
    }

    pub fn lasting(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn duration_or(&self, default: Duration) -> Duration {
        self.duration.unwrap_or(default)
    }
}

/// Presentation layer that shows notices.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Prints notices to stdout and mirrors them into the log.
#[derive(Debug, Clone)]
pub struct ConsoleNotifier {
    default_duration: Duration,
}

impl ConsoleNotifier {
    pub fn new(default_duration: Duration) -> Self {
        Self { default_duration }
    }

    /// Display time in milliseconds, saturating at `u64::MAX`.
    pub fn display_ms(&self, notice: &Notice) -> u64 {
        u64::try_from(notice.duration_or(self.default_duration).as_millis()).unwrap_or(u64::MAX)
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        let duration_ms = self.display_ms(&notice);
        match notice.severity {
            Severity::Success => {
                info!(duration_ms, "{}", notice.message);
                println!("[ok] {}", notice.message);
            }
            Severity::Error => {
                warn!(duration_ms, "{}", notice.message);
                println!("[error] {}", notice.message);
            }
        }
    }
}

/// Keeps every notice in memory, newest last. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct NoticeLog {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl NoticeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .map(|n| n.clone())
            .unwrap_or_default()
    }

    pub fn last(&self) -> Option<Notice> {
        self.notices.lock().ok().and_then(|n| n.last().cloned())
    }

    pub fn clear(&self) {
        if let Ok(mut n) = self.notices.lock() {
            n.clear();
        }
    }
}

impl Notifier for NoticeLog {
    fn notify(&self, notice: Notice) {
        if let Ok(mut n) = self.notices.lock() {
            n.push(notice);
        }
    }
}
