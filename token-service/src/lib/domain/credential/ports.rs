use async_trait::async_trait;

use crate::domain::credential::models::Company;
use crate::domain::credential::models::CompanyId;
use crate::domain::credential::models::CompanyName;
use crate::domain::credential::models::IssuedToken;
use crate::domain::credential::models::IssueTokenCommand;
use crate::domain::credential::models::RegisterCompanyCommand;
use crate::domain::credential::models::RegisteredCompany;
use crate::domain::credential::models::Token;
use crate::domain::credential::models::TokenId;
use crate::credential::errors::CredentialError;

/// Port for the credential orchestration service.
#[async_trait]
pub trait CredentialServicePort: Send + Sync + 'static {
    /// Register a new company and mint its one-time password.
    ///
    /// # Arguments
    /// * `command` - Validated command containing the company name
    ///
    /// # Returns
    /// Persisted company plus the one-time plaintext password
    ///
    /// # Errors
    /// * `DuplicateName` - Company name is already taken
    /// * `DatabaseError` - Database operation failed
    async fn register_company(
        &self,
        command: RegisterCompanyCommand,
    ) -> Result<RegisteredCompany, CredentialError>;

    /// Authenticate a company and issue it a new bearer token.
    ///
    /// # Arguments
    /// * `command` - Company name and plaintext password
    ///
    /// # Returns
    /// Persisted token plus the one-time plaintext token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown name, inactive company, or wrong
    ///   password (indistinguishable by design)
    /// * `DatabaseError` - Database operation failed
    async fn issue_token(&self, command: IssueTokenCommand)
        -> Result<IssuedToken, CredentialError>;

    /// Validate a presented token, optionally scoped to a company.
    ///
    /// With `company_name` set, a token owned by another company is
    /// reported as a mismatch, distinct from not-found. Without it the
    /// lookup is global.
    ///
    /// # Arguments
    /// * `token` - Plaintext token as presented by the caller
    /// * `company_name` - Optional owning-company scope
    ///
    /// # Returns
    /// The resolved, valid token record
    ///
    /// # Errors
    /// * `TokenNotFound` - No token with this digest exists
    /// * `TokenCompanyMismatch` - Token exists but belongs to another company
    /// * `TokenInactive` - Token has been deactivated
    /// * `CompanyInactive` - Owning company has been deactivated
    /// * `DatabaseError` - Database operation failed
    async fn validate_token(
        &self,
        token: &str,
        company_name: Option<&CompanyName>,
    ) -> Result<Token, CredentialError>;
}

/// Persistence operations for the company aggregate.
///
/// Name uniqueness is the store's responsibility: `create` must be an
/// atomic unique-constrained insert, never a check-then-act.
#[async_trait]
pub trait CompanyRepository: Send + Sync + 'static {
    /// Persist a new company.
    ///
    /// # Arguments
    /// * `company` - Company entity to create
    ///
    /// # Returns
    /// Created company entity
    ///
    /// # Errors
    /// * `DuplicateName` - Company name is already taken
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, company: Company) -> Result<Company, CredentialError>;

    /// Retrieve a company by its unique name (case-sensitive).
    ///
    /// # Arguments
    /// * `name` - Company name to search for
    ///
    /// # Returns
    /// Optional company entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_name(&self, name: &CompanyName) -> Result<Option<Company>, CredentialError>;

    /// Toggle a company's active flag (administrative action).
    ///
    /// # Arguments
    /// * `id` - Company ID to update
    /// * `active` - New active state
    ///
    /// # Returns
    /// Unit on success
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed or company missing
    async fn set_active(&self, id: &CompanyId, active: bool) -> Result<(), CredentialError>;
}

/// Persistence operations for the token aggregate.
///
/// Digest uniqueness is enforced by the store via an atomic
/// unique-constrained insert. Loaded tokens carry an owning-company
/// snapshot so validity stays a pure predicate.
#[async_trait]
pub trait TokenRepository: Send + Sync + 'static {
    /// Persist a new token.
    ///
    /// # Arguments
    /// * `token` - Token entity to create
    ///
    /// # Returns
    /// Created token entity
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed (a digest collision
    ///   surfaces here; with 256-bit digests it is not expected)
    async fn create(&self, token: Token) -> Result<Token, CredentialError>;

    /// Retrieve a token by its digest.
    ///
    /// # Arguments
    /// * `token_hash` - Hex digest to search for
    ///
    /// # Returns
    /// Optional token entity with owner snapshot (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_hash(&self, token_hash: &str) -> Result<Option<Token>, CredentialError>;

    /// Retrieve all tokens owned by a company, most recent first.
    ///
    /// # Arguments
    /// * `company_id` - Owning company ID
    ///
    /// # Returns
    /// Vector of tokens ordered by creation time descending
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_for_company(&self, company_id: &CompanyId)
        -> Result<Vec<Token>, CredentialError>;

    /// Toggle a token's active flag (administrative revocation).
    ///
    /// # Arguments
    /// * `id` - Token ID to update
    /// * `active` - New active state
    ///
    /// # Returns
    /// Unit on success
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed or token missing
    async fn set_active(&self, id: &TokenId, active: bool) -> Result<(), CredentialError>;
}
