//! Auth Flows Library
//!
//! Sign-in screens of the daycare app without their rendering: the login
//! form, the forced password-change form, the backend and notifier seams
//! they talk to, and an in-memory backend to run them against.

pub mod client;
pub mod config;
pub mod directory;
pub mod forms;
pub mod notify;

use std::sync::Arc;

use tracing::info;

use common::AppResult;

use crate::config::AuthFlowsConfig;
use crate::directory::{DirectorySeed, InMemoryDirectory};

/// Build the directory described by the configuration. Without a seed file
/// the directory starts empty and every login is rejected.
pub fn build_directory(config: &AuthFlowsConfig) -> AppResult<Arc<InMemoryDirectory>> {
    let directory = match &config.directory_seed {
        Some(path) => {
            info!("Loading directory seed from {}", path.display());
            InMemoryDirectory::from_seed(DirectorySeed::from_file(path)?)?
        }
        None => InMemoryDirectory::new(),
    };
    Ok(Arc::new(directory))
}
