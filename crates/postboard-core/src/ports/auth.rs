//! Credential ports.

use crate::domain::User;
use crate::error::DomainError;

/// Password hashing service.
pub trait PasswordService: Send + Sync {
    /// Hash a plain text password.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a password against a hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;

    /// Confirm a change to `user`'s account with the password they typed.
    fn confirm(&self, user: &User, password: &str) -> Result<(), DomainError> {
        match self.verify(password, &user.password_hash) {
            Ok(true) => Ok(()),
            Ok(false) => Err(DomainError::Unauthorized),
            Err(err) => Err(DomainError::Internal(err.to_string())),
        }
    }
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Hashing error: {0}")]
    HashingError(String),
}
