/// Password storage schemes
///
/// How a password is stored and checked is a pluggable concern behind
/// [`CredentialHasher`]. Two schemes exist:
///
/// - [`PasswordScheme::Plaintext`]: stores the password as submitted and
///   compares byte-for-byte. This keeps the historical `/api/users` contract
///   where the stored password is returned verbatim.
/// - [`PasswordScheme::Argon2`]: stores an Argon2id PHC string.
///
/// # Example
///
/// ```
/// use trackwise_shared::auth::password::PasswordScheme;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let hasher = PasswordScheme::Argon2.hasher();
/// let stored = hasher.hash("hunter2")?;
///
/// assert!(hasher.verify("hunter2", &stored)?);
/// assert!(!hasher.verify("hunter3", &stored)?);
/// # Ok(())
/// # }
/// ```

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use std::{fmt, str::FromStr, sync::Arc};

/// Error type for password operations
#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    /// Failed to hash password
    #[error("Failed to hash password: {0}")]
    HashError(String),

    /// Failed to verify password
    #[error("Failed to verify password: {0}")]
    VerifyError(String),

    /// Stored value is not a valid hash for this scheme
    #[error("Invalid password hash format: {0}")]
    InvalidHash(String),

    /// Unknown scheme name in configuration
    #[error("Unknown password scheme '{0}' (expected 'plaintext' or 'argon2')")]
    UnknownScheme(String),
}

/// Turns a submitted password into its stored form and checks it later
pub trait CredentialHasher: Send + Sync + fmt::Debug {
    /// Produces the value to persist for `password`
    fn hash(&self, password: &str) -> Result<String, PasswordError>;

    /// Checks a submitted password against a persisted value
    fn verify(&self, password: &str, stored: &str) -> Result<bool, PasswordError>;
}

/// Stores passwords as submitted
#[derive(Debug, Clone, Copy, Default)]
pub struct Plaintext;

impl CredentialHasher for Plaintext {
    fn hash(&self, password: &str) -> Result<String, PasswordError> {
        Ok(password.to_string())
    }

    fn verify(&self, password: &str, stored: &str) -> Result<bool, PasswordError> {
        Ok(password == stored)
    }
}

/// Stores Argon2id hashes with a random 16-byte salt
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Hasher;

impl CredentialHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| PasswordError::HashError(format!("Hash generation failed: {}", e)))?;

        Ok(password_hash.to_string())
    }

    fn verify(&self, password: &str, stored: &str) -> Result<bool, PasswordError> {
        let parsed_hash = PasswordHash::new(stored)
            .map_err(|e| PasswordError::InvalidHash(format!("Failed to parse hash: {}", e)))?;

        // Parameters come from the PHC string, not from the default instance
        match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(PasswordError::VerifyError(format!("Verification failed: {}", e))),
        }
    }
}

/// Configured password storage scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasswordScheme {
    /// Store and compare the submitted password as-is
    #[default]
    Plaintext,

    /// Store Argon2id hashes
    Argon2,
}

impl PasswordScheme {
    /// Name used in configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            PasswordScheme::Plaintext => "plaintext",
            PasswordScheme::Argon2 => "argon2",
        }
    }

    /// Builds the hasher for this scheme
    pub fn hasher(self) -> Arc<dyn CredentialHasher> {
        match self {
            PasswordScheme::Plaintext => Arc::new(Plaintext),
            PasswordScheme::Argon2 => Arc::new(Argon2Hasher),
        }
    }
}

impl FromStr for PasswordScheme {
    type Err = PasswordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plaintext" => Ok(PasswordScheme::Plaintext),
            "argon2" | "argon2id" => Ok(PasswordScheme::Argon2),
            other => Err(PasswordError::UnknownScheme(other.to_string())),
        }
    }
}

impl fmt::Display for PasswordScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plaintext_stores_password_verbatim() {
        let stored = Plaintext.hash("x").unwrap();
        assert_eq!(stored, "x");
    }

    #[test]
    fn test_plaintext_verify_is_exact() {
        assert!(Plaintext.verify("secret", "secret").unwrap());
        assert!(!Plaintext.verify("Secret", "secret").unwrap());
        assert!(!Plaintext.verify("secret ", "secret").unwrap());
        assert!(!Plaintext.verify("", "secret").unwrap());
    }

    #[test]
    fn test_argon2_hash_format() {
        let hash = Argon2Hasher.hash("test_password_123").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(hash.contains("v=19"));
    }

    #[test]
    fn test_argon2_produces_different_salts() {
        let hasher = Argon2Hasher;
        let hash1 = hasher.hash("same_password").unwrap();
        let hash2 = hasher.hash("same_password").unwrap();
        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_argon2_verify() {
        let hasher = Argon2Hasher;
        let hash = hasher.hash("correct_password").unwrap();

        assert!(hasher.verify("correct_password", &hash).unwrap());
        assert!(!hasher.verify("wrong_password", &hash).unwrap());
        assert!(!hasher.verify("", &hash).unwrap());
    }

    #[test]
    fn test_argon2_rejects_non_phc_value() {
        let result = Argon2Hasher.verify("password", "password");
        assert!(matches!(result, Err(PasswordError::InvalidHash(_))));
    }

    #[test]
    fn test_scheme_from_str() {
        assert_eq!("plaintext".parse::<PasswordScheme>().unwrap(), PasswordScheme::Plaintext);
        assert_eq!("Argon2".parse::<PasswordScheme>().unwrap(), PasswordScheme::Argon2);
        assert_eq!("argon2id".parse::<PasswordScheme>().unwrap(), PasswordScheme::Argon2);
        assert!("md5".parse::<PasswordScheme>().is_err());
    }

    #[test]
    fn test_scheme_default_is_plaintext() {
        assert_eq!(PasswordScheme::default(), PasswordScheme::Plaintext);
        assert_eq!(PasswordScheme::default().to_string(), "plaintext");
    }

    #[test]
    fn test_scheme_hasher_dispatch() {
        let stored = PasswordScheme::Plaintext.hasher().hash("pw").unwrap();
        assert_eq!(stored, "pw");

        let stored = PasswordScheme::Argon2.hasher().hash("pw").unwrap();
        assert!(stored.starts_with("$argon2id$"));
    }
}
