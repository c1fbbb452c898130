//! Error types for token issuance and inspection.

/// Everything that can go wrong while minting or reading a token.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("JWT secret not configured. Set JWT_SECRET or pass --secret.")]
    MissingSecret,

    #[error("JWT secret is {len} bytes; HS512 needs at least {min} bytes")]
    WeakSecret { len: usize, min: usize },

    #[error("Token validity must be positive, got {0} seconds")]
    InvalidValidity(i64),

    #[error("Validity of {value} {unit} is out of range")]
    ValidityOutOfRange { value: i64, unit: &'static str },

    #[error("Env file error: {0}")]
    EnvFile(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("Malformed token: {0}")]
    Malformed(String),

    #[error("Wrong token type: expected {expected}, found {found}")]
    WrongTokenType { expected: String, found: String },
}

pub type Result<T> = std::result::Result<T, TokenError>;
