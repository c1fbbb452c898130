//! Signing configuration: where the shared secret comes from.

use std::env;
use std::path::Path;

use jsonwebtoken::Algorithm;

use crate::error::{Result, TokenError};

/// Environment variable holding the shared signing secret.
pub const SECRET_ENV: &str = "JWT_SECRET";

/// HMAC-SHA512 keys shorter than the hash output are refused by the backend.
pub const MIN_SECRET_LEN: usize = 64;

/// Local development secret. Must match `jwt.secret.key` of a dev backend.
pub const DEV_SECRET: &str =
    "bookmyhotel-development-signing-secret-do-not-use-in-production-0123456789abcdef";

/// Shared key and algorithm used to sign and verify tokens.
#[derive(Clone)]
pub struct SigningConfig {
    secret: String,
    algorithm: Algorithm,
}

impl std::fmt::Debug for SigningConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningConfig")
            .field("secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

impl SigningConfig {
    /// Build an HS512 config, rejecting empty or short secrets.
    pub fn new(secret: impl Into<String>) -> Result<Self> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(TokenError::MissingSecret);
        }
        if secret.len() < MIN_SECRET_LEN {
            return Err(TokenError::WeakSecret {
                len: secret.len(),
                min: MIN_SECRET_LEN,
            });
        }
        Ok(Self {
            secret,
            algorithm: Algorithm::HS512,
        })
    }

    /// Pick the secret from an explicit value, then the environment value,
    /// then the development default.
    pub fn from_sources(explicit: Option<String>, from_env: Option<String>) -> Result<Self> {
        match explicit.or(from_env) {
            Some(secret) => Self::new(secret),
            None => {
                tracing::warn!(
                    "{} is not set, signing with the development secret",
                    SECRET_ENV
                );
                Self::new(DEV_SECRET)
            }
        }
    }

    /// Resolve the secret for a binary: `.env` is loaded first, then
    /// `explicit` wins over `JWT_SECRET`.
    pub fn resolve(explicit: Option<String>) -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_sources(explicit, env::var(SECRET_ENV).ok())
    }

    pub fn secret(&self) -> &[u8] {
        self.secret.as_bytes()
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }
}

/// Load an explicit env file into the process environment.
pub fn load_env_file(path: &Path) -> Result<()> {
    dotenv::from_path(path)
        .map_err(|e| TokenError::EnvFile(format!("Failed to load {}: {}", path.display(), e)))
}
