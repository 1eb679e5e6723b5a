//! Auth flows configuration.

use std::env;
use std::path::PathBuf;

use common::{LogConfig, NoticeConfig};

/// Auth flows configuration.
#[derive(Debug, Clone, Default)]
pub struct AuthFlowsConfig {
    /// Notice durations and support contact
    pub notices: NoticeConfig,
    /// Logging defaults
    pub log: LogConfig,
    /// JSON file used to seed the in-memory directory
    pub directory_seed: Option<PathBuf>,
}

impl AuthFlowsConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = NoticeConfig::default();
        Self {
            notices: NoticeConfig {
                default_duration_ms: env::var("NOTICE_DURATION_MS")
                    .ok()
                    .and_then(|d| d.parse().ok())
                    .unwrap_or(defaults.default_duration_ms),
                extended_duration_ms: env::var("EXTENDED_NOTICE_DURATION_MS")
                    .ok()
                    .and_then(|d| d.parse().ok())
                    .unwrap_or(defaults.extended_duration_ms),
                support_contact: env::var("SUPPORT_CONTACT")
                    .unwrap_or(defaults.support_contact),
            },
            log: LogConfig {
                level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            directory_seed: env::var("DIRECTORY_SEED").ok().map(PathBuf::from),
        }
    }
}
