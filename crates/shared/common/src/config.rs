//! Shared configuration structures.

use serde::{Deserialize, Serialize};

use domain::{DEFAULT_NOTICE_DURATION_MS, DEFAULT_SUPPORT_CONTACT, EXTENDED_NOTICE_DURATION_MS};

/// How user-facing notices are presented.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NoticeConfig {
    /// Display duration for ordinary notices in milliseconds
    pub default_duration_ms: u64,
    /// Display duration for notices that need more reading time
    pub extended_duration_ms: u64,
    /// Name shown when users are told to contact support
    pub support_contact: String,
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: DEFAULT_NOTICE_DURATION_MS,
            extended_duration_ms: EXTENDED_NOTICE_DURATION_MS,
            support_contact: DEFAULT_SUPPORT_CONTACT.to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogConfig {
    /// Default filter when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
