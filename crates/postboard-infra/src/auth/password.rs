//! Argon2id hashes for `users.password_hash`.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use postboard_core::ports::{AuthError, PasswordService};

/// New hashes use Argon2id v0x13 with `params`. Verification reads the
/// parameters back out of the stored PHC string, so rows hashed under older
/// settings keep working.
#[derive(Debug, Clone)]
pub struct Argon2PasswordService {
    params: Params,
}

impl Argon2PasswordService {
    pub fn new() -> Self {
        Self::with_params(Params::default())
    }

    pub fn with_params(params: Params) -> Self {
        Self { params }
    }

    fn hasher(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl Default for Argon2PasswordService {
    fn default() -> Self {
        Self::new()
    }
}

fn hashing_error(err: password_hash::Error) -> AuthError {
    AuthError::HashingError(err.to_string())
}

impl PasswordService for Argon2PasswordService {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .hasher()
            .hash_password(password.as_bytes(), &salt)
            .map_err(hashing_error)?;
        Ok(hash.to_string())
    }

    /// Only a wrong password is a mismatch. A row that is not a PHC string
    /// is an error.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let stored = PasswordHash::new(hash).map_err(hashing_error)?;

        match self.hasher().verify_password(password.as_bytes(), &stored) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(err) => Err(hashing_error(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use postboard_core::domain::User;
    use postboard_core::error::DomainError;

    use super::*;

    fn cheap() -> Argon2PasswordService {
        Argon2PasswordService::with_params(Params::new(8, 1, 1, None).unwrap())
    }

    #[test]
    fn test_hash_is_salted_argon2id() {
        let service = cheap();

        let first = service.hash("hunter2").unwrap();
        let second = service.hash("hunter2").unwrap();

        assert!(first.starts_with("$argon2id$v=19$m=8,t=1,p=1$"));
        assert!(!first.contains("hunter2"));
        assert_ne!(first, second);
        assert!(service.verify("hunter2", &first).unwrap());
        assert!(!service.verify("hunter3", &second).unwrap());
    }

    #[test]
    fn test_verify_uses_stored_params() {
        let old = cheap().hash("hunter2").unwrap();

        assert!(Argon2PasswordService::new().verify("hunter2", &old).unwrap());
    }

    #[test]
    fn test_malformed_hash_is_an_error() {
        let result = cheap().verify("hunter2", "hunter2");

        assert!(matches!(result, Err(AuthError::HashingError(_))));
    }

    #[test]
    fn test_confirm_user_credentials() {
        let service = cheap();
        let user = User::new(
            "u-1".to_string(),
            "ann".to_string(),
            "ann@example.com".to_string(),
            service.hash("s3cret").unwrap(),
        )
        .unwrap();

        assert!(service.confirm(&user, "s3cret").is_ok());
        assert!(matches!(
            service.confirm(&user, "guess"),
            Err(DomainError::Unauthorized)
        ));
    }
}
