//! User-facing notices.

mod notice;

pub use notice::{ConsoleNotifier, Notice, NoticeLog, Notifier, Severity};
