use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// User entity - an account in the secondary users board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub user_name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

impl User {
    /// Validate registration input and build a user around an already
    /// computed password hash.
    pub fn new(
        id: String,
        user_name: String,
        email: String,
        password_hash: String,
    ) -> Result<Self, DomainError> {
        validate_user_name(&user_name)?;
        if email.is_empty() || !email.contains('@') {
            return Err(DomainError::Validation("Invalid email address".to_string()));
        }

        Ok(Self {
            id,
            user_name,
            email,
            password_hash,
        })
    }
}

pub fn validate_user_name(user_name: &str) -> Result<(), DomainError> {
    if user_name.is_empty() {
        return Err(DomainError::Validation("User name is required".to_string()));
    }
    Ok(())
}
