use std::sync::Arc;

use chrono::Utc;
use credentials::CredentialHasher;
use credentials::SecretGenerator;

use crate::credential::errors::CredentialError;
use crate::domain::credential::models::Company;
use crate::domain::credential::models::CompanyId;
use crate::domain::credential::models::CompanyName;
use crate::domain::credential::ports::CompanyRepository;

/// Company registration and authentication.
///
/// Owns the password lifecycle: generates the one-time plaintext,
/// persists only its digest, and checks presented passwords by digest
/// comparison.
pub struct CompanyDirectory<CR>
where
    CR: CompanyRepository,
{
    repository: Arc<CR>,
    hasher: CredentialHasher,
    generator: SecretGenerator,
}

impl<CR> CompanyDirectory<CR>
where
    CR: CompanyRepository,
{
    /// Create a new company directory with an injected repository.
    ///
    /// # Arguments
    /// * `repository` - Company persistence implementation
    ///
    /// # Returns
    /// Configured company directory instance
    pub fn new(repository: Arc<CR>) -> Self {
        Self {
            repository,
            hasher: CredentialHasher::new(),
            generator: SecretGenerator::new(),
        }
    }

    /// Register a new company under a unique name.
    ///
    /// Duplication is detected by the store's unique constraint, not by
    /// a prior existence check, so concurrent registrations of the same
    /// name cannot race.
    ///
    /// # Arguments
    /// * `name` - Validated company name
    ///
    /// # Returns
    /// Persisted company and the one-time plaintext password
    ///
    /// # Errors
    /// * `DuplicateName` - Company name is already taken
    /// * `DatabaseError` - Database operation failed
    pub async fn register(
        &self,
        name: CompanyName,
    ) -> Result<(Company, String), CredentialError> {
        let password = self.generator.generate_password();
        let company = Company {
            id: CompanyId::new(),
            name,
            password_hash: self.hasher.hash(&password),
            active: true,
            created_at: Utc::now(),
        };

        let company = self.repository.create(company).await?;

        tracing::info!(company = %company.name, "Company registered");

        Ok((company, password))
    }

    /// Authenticate a company by name and password.
    ///
    /// Unknown name, inactive company, and wrong password all collapse
    /// into `InvalidCredentials` so callers cannot probe which
    /// companies exist or are active.
    ///
    /// # Arguments
    /// * `name` - Validated company name
    /// * `password` - Plaintext password to check
    ///
    /// # Returns
    /// The authenticated company entity
    ///
    /// # Errors
    /// * `InvalidCredentials` - Any of the three checks failed
    /// * `DatabaseError` - Database operation failed
    pub async fn authenticate(
        &self,
        name: &CompanyName,
        password: &str,
    ) -> Result<Company, CredentialError> {
        let company = self
            .repository
            .find_by_name(name)
            .await?
            .ok_or(CredentialError::InvalidCredentials)?;

        if !company.active || company.password_hash != self.hasher.hash(password) {
            return Err(CredentialError::InvalidCredentials);
        }

        Ok(company)
    }
}
