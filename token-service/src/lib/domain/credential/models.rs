use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::credential::errors::CompanyIdError;
use crate::credential::errors::CompanyNameError;
use crate::credential::errors::TokenIdError;

/// Company aggregate entity.
///
/// Represents a registered tenant. The plaintext password is never part
/// of this entity; only its digest is carried after registration.
#[derive(Debug, Clone)]
pub struct Company {
    pub id: CompanyId,
    pub name: CompanyName,
    pub password_hash: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Company unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompanyId(pub Uuid);

impl CompanyId {
    /// Generate a new random company ID.
    ///
    /// # Returns
    /// CompanyId with random UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a company ID from string.
    ///
    /// # Arguments
    /// * `s` - UUID string to parse
    ///
    /// # Returns
    /// Parsed CompanyId
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, CompanyIdError> {
        Uuid::parse_str(s)
            .map(CompanyId)
            .map_err(|e| CompanyIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for CompanyId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Company name value type
///
/// Ensures the name is non-empty and at most 255 characters. Names are
/// matched case-sensitively and are unique across all companies.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompanyName(String);

impl CompanyName {
    const MAX_LENGTH: usize = 255;

    /// Create a new valid company name.
    ///
    /// # Arguments
    /// * `name` - Raw company name string
    ///
    /// # Returns
    /// Validated CompanyName value object
    ///
    /// # Errors
    /// * `Empty` - Name is empty
    /// * `TooLong` - Name longer than 255 characters
    pub fn new(name: String) -> Result<Self, CompanyNameError> {
        let length = name.chars().count();
        if length == 0 {
            Err(CompanyNameError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(CompanyNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(name))
        }
    }

    /// Get name as string slice.
    ///
    /// # Returns
    /// Company name string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompanyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Token aggregate entity.
///
/// Opaque bearer credential owned by exactly one company. Only the
/// digest of the token is stored; the plaintext exists solely in the
/// issuance return value.
#[derive(Debug, Clone)]
pub struct Token {
    pub id: TokenId,
    pub token_hash: String,
    pub company: TokenOwner,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl Token {
    /// Derive the validity state of this token.
    ///
    /// Pure predicate over already-loaded state, no I/O. A token leaves
    /// `Valid` only through an external toggle of its own flag or its
    /// owner's; there is no path back within this core.
    ///
    /// # Returns
    /// Derived TokenValidity state
    pub fn validity(&self) -> TokenValidity {
        if !self.active {
            TokenValidity::InactiveToken
        } else if !self.company.active {
            TokenValidity::InactiveCompanyOwner
        } else {
            TokenValidity::Valid
        }
    }

    /// Check whether the token is currently usable.
    ///
    /// # Returns
    /// True iff the token and its owning company are both active
    pub fn is_valid(&self) -> bool {
        self.validity() == TokenValidity::Valid
    }
}

/// Derived validity state of a token (never stored).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenValidity {
    Valid,
    InactiveToken,
    InactiveCompanyOwner,
}

/// Token unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenId(pub Uuid);

impl TokenId {
    /// Generate a new random token ID.
    ///
    /// # Returns
    /// TokenId with random UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a token ID from string.
    ///
    /// # Arguments
    /// * `s` - UUID string to parse
    ///
    /// # Returns
    /// Parsed TokenId
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, TokenIdError> {
        Uuid::parse_str(s)
            .map(TokenId)
            .map_err(|e| TokenIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for TokenId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Owning-company snapshot carried by a loaded token.
///
/// Holds exactly the owner state the validity predicate needs, so that
/// `Token::is_valid` stays free of I/O.
#[derive(Debug, Clone)]
pub struct TokenOwner {
    pub id: CompanyId,
    pub name: CompanyName,
    pub active: bool,
}

impl From<&Company> for TokenOwner {
    fn from(company: &Company) -> Self {
        Self {
            id: company.id,
            name: company.name.clone(),
            active: company.active,
        }
    }
}

/// Command to register a new company with a validated name
#[derive(Debug)]
pub struct RegisterCompanyCommand {
    pub name: CompanyName,
}

impl RegisterCompanyCommand {
    /// Construct a new register company command.
    ///
    /// # Arguments
    /// * `name` - Validated company name
    ///
    /// # Returns
    /// RegisterCompanyCommand with validated fields
    pub fn new(name: CompanyName) -> Self {
        Self { name }
    }
}

/// Result of a successful registration.
///
/// `password` is the one-time plaintext; it is never persisted or
/// logged and must be shown to the caller exactly once.
#[derive(Debug)]
pub struct RegisteredCompany {
    pub company: Company,
    pub password: String,
}

/// Command to issue a token for an authenticated company
#[derive(Debug)]
pub struct IssueTokenCommand {
    pub company_name: CompanyName,
    pub password: String,
}

impl IssueTokenCommand {
    /// Construct a new issue token command.
    ///
    /// # Arguments
    /// * `company_name` - Validated company name
    /// * `password` - Plaintext password to authenticate with
    ///
    /// # Returns
    /// IssueTokenCommand with validated fields
    pub fn new(company_name: CompanyName, password: String) -> Self {
        Self {
            company_name,
            password,
        }
    }
}

/// Result of a successful token issuance.
///
/// `secret` is the one-time plaintext token, disclosed exactly once.
#[derive(Debug)]
pub struct IssuedToken {
    pub token: Token,
    pub secret: String,
}
