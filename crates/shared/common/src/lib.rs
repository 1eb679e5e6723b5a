//! Common utilities shared across the auth flows.
//!
//! This crate provides:
//! - Unified error handling for collaborator failures
//! - Configuration structures

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult, OptionExt};
