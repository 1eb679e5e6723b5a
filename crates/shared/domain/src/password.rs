//! Password value object and password-change rules.
//!
//! Stored passwords are Argon2 hashes; the plaintext never leaves the
//! caller. The change rules are checked in a fixed order and the first
//! failure wins.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::constants::MIN_PASSWORD_LENGTH;
use crate::error::{DomainError, DomainResult};

pub const TOO_SHORT_MESSAGE: &str = "Password must be at least 8 characters long";
pub const MISMATCH_MESSAGE: &str = "Passwords do not match";
pub const UNCHANGED_MESSAGE: &str = "New password must be different from your current password";

/// Password value object that handles hashing and verification.
#[derive(Clone)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Create a new password by hashing the plain text.
    ///
    /// # Errors
    /// Returns a password error if the plain text is shorter than
    /// [`MIN_PASSWORD_LENGTH`] characters.
    pub fn new(plain_text: &str) -> DomainResult<Self> {
        if char_count(plain_text) < MIN_PASSWORD_LENGTH {
            return Err(DomainError::password(TOO_SHORT_MESSAGE));
        }

        Self::import(plain_text)
    }

    /// Hash an existing plaintext credential without applying the length
    /// policy. Used when loading accounts created before the policy existed.
    pub fn import(plain_text: &str) -> DomainResult<Self> {
        let hash = Self::hash(plain_text)?;
        Ok(Self { hash })
    }

    /// Create a Password from an existing hash.
    pub fn from_hash(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Verify a plain text password against this hash.
    pub fn verify(&self, plain_text: &str) -> bool {
        Self::verify_hash(plain_text, &self.hash).unwrap_or(false)
    }

    fn hash(plain_text: &str) -> DomainResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::argon2()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| DomainError::internal(format!("Password hash failed: {}", e)))?;
        Ok(hash.to_string())
    }

    fn verify_hash(plain_text: &str, hash: &str) -> DomainResult<bool> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| DomainError::internal(format!("Invalid hash format: {}", e)))?;
        Ok(Self::argon2()
            .verify_password(plain_text.as_bytes(), &parsed)
            .is_ok())
    }

    #[inline]
    fn argon2() -> Argon2<'static> {
        Argon2::default()
    }
}

/// Length as a person counts it, not in bytes.
fn char_count(s: &str) -> usize {
    s.chars().count()
}

/// Rules that need nothing but the typed input: minimum length, then
/// confirmation match.
pub fn check_new_password(new_password: &str, confirmation: &str) -> DomainResult<()> {
    if char_count(new_password) < MIN_PASSWORD_LENGTH {
        return Err(DomainError::password(TOO_SHORT_MESSAGE));
    }

    if new_password != confirmation {
        return Err(DomainError::password(MISMATCH_MESSAGE));
    }

    Ok(())
}

/// Rules that need the signed-in user: one must exist, and the new
/// password must not verify against the stored one.
pub fn ensure_changed(new_password: &str, current: Option<&Password>) -> DomainResult<()> {
    let current = current.ok_or(DomainError::Unauthorized)?;
    if current.verify(new_password) {
        return Err(DomainError::password(UNCHANGED_MESSAGE));
    }

    Ok(())
}

/// Full change check; the first failing rule wins.
pub fn validate_password_change(
    new_password: &str,
    confirmation: &str,
    current: Option<&Password>,
) -> DomainResult<()> {
    check_new_password(new_password, confirmation)?;
    ensure_changed(new_password, current)
}

/// Advisory feedback shown while the user is still typing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasswordFeedback {
    /// Characters still missing to reach the minimum, if any
    pub chars_needed: Option<usize>,
    /// Confirmation has been typed and differs from the new password
    pub mismatch: bool,
}

impl PasswordFeedback {
    pub fn evaluate(new_password: &str, confirmation: &str) -> Self {
        let len = char_count(new_password);
        let chars_needed = (len > 0 && len < MIN_PASSWORD_LENGTH).then(|| MIN_PASSWORD_LENGTH - len);
        let mismatch = !confirmation.is_empty() && new_password != confirmation;

        Self {
            chars_needed,
            mismatch,
        }
    }

    /// Inline hint for the new-password field.
    pub fn length_hint(&self) -> Option<String> {
        self.chars_needed.map(|n| {
            format!(
                "Password must be at least {} characters ({} more needed)",
                MIN_PASSWORD_LENGTH, n
            )
        })
    }

    /// Inline hint for the confirmation field.
    pub fn mismatch_hint(&self) -> Option<&'static str> {
        self.mismatch.then_some(MISMATCH_MESSAGE)
    }
}
