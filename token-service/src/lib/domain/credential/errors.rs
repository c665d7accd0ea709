use thiserror::Error;

/// Error for CompanyId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CompanyIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for TokenId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for CompanyName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CompanyNameError {
    #[error("Company name must not be empty")]
    Empty,

    #[error("Company name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for all credential operations
#[derive(Debug, Clone, Error)]
pub enum CredentialError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid company ID: {0}")]
    InvalidCompanyId(#[from] CompanyIdError),

    #[error("Invalid token ID: {0}")]
    InvalidTokenId(#[from] TokenIdError),

    #[error("Invalid company name: {0}")]
    InvalidCompanyName(#[from] CompanyNameError),

    // Domain-level errors
    #[error("Company name already exists: {0}")]
    DuplicateName(String),

    /// Deliberately opaque: unknown name, inactive company, and wrong
    /// password are indistinguishable to the caller.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token does not exist")]
    TokenNotFound,

    #[error("Token is inactive")]
    TokenInactive,

    #[error("Company is inactive")]
    CompanyInactive,

    #[error("Token does not belong to company: {0}")]
    TokenCompanyMismatch(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for CredentialError {
    fn from(err: anyhow::Error) -> Self {
        CredentialError::Unknown(err.to_string())
    }
}
