//! Clients for the authentication backend.

mod auth_client;

#[cfg(any(test, feature = "test-utils"))]
pub use auth_client::MockAuthCollaborator;
pub use auth_client::AuthCollaborator;
