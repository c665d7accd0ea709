use std::sync::Arc;

use chrono::Utc;
use credentials::CredentialHasher;
use credentials::SecretGenerator;

use crate::credential::errors::CredentialError;
use crate::domain::credential::models::Company;
use crate::domain::credential::models::CompanyId;
use crate::domain::credential::models::CompanyName;
use crate::domain::credential::models::Token;
use crate::domain::credential::models::TokenId;
use crate::domain::credential::models::TokenOwner;
use crate::domain::credential::ports::TokenRepository;

/// Token issuance and resolution.
///
/// Tokens are opaque: the store hands the plaintext out once at
/// issuance and afterwards only ever sees digests.
pub struct TokenStore<TR>
where
    TR: TokenRepository,
{
    repository: Arc<TR>,
    hasher: CredentialHasher,
    generator: SecretGenerator,
}

impl<TR> TokenStore<TR>
where
    TR: TokenRepository,
{
    /// Create a new token store with an injected repository.
    ///
    /// # Arguments
    /// * `repository` - Token persistence implementation
    ///
    /// # Returns
    /// Configured token store instance
    pub fn new(repository: Arc<TR>) -> Self {
        Self {
            repository,
            hasher: CredentialHasher::new(),
            generator: SecretGenerator::new(),
        }
    }

    /// Issue a new token for an already-authenticated company.
    ///
    /// # Arguments
    /// * `company` - Authenticated owning company
    ///
    /// # Returns
    /// Persisted token and the one-time plaintext token
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    pub async fn issue(&self, company: &Company) -> Result<(Token, String), CredentialError> {
        let secret = self.generator.generate_token();
        let token = Token {
            id: TokenId::new(),
            token_hash: self.hasher.hash(&secret),
            company: TokenOwner::from(company),
            active: true,
            created_at: Utc::now(),
        };

        let token = self.repository.create(token).await?;

        tracing::info!(company = %token.company.name, "Token issued");

        Ok((token, secret))
    }

    /// Resolve a presented token by its digest.
    ///
    /// # Arguments
    /// * `token` - Plaintext token as presented
    ///
    /// # Returns
    /// The stored token record with its owner snapshot
    ///
    /// # Errors
    /// * `TokenNotFound` - No token with this digest exists
    /// * `DatabaseError` - Database operation failed
    pub async fn resolve(&self, token: &str) -> Result<Token, CredentialError> {
        self.repository
            .find_by_hash(&self.hasher.hash(token))
            .await?
            .ok_or(CredentialError::TokenNotFound)
    }

    /// Resolve a presented token, requiring a specific owning company.
    ///
    /// Distinguishes "unknown token" from "wrong company" so internal
    /// callers can diagnose which it was.
    ///
    /// # Arguments
    /// * `token` - Plaintext token as presented
    /// * `company_name` - Required owning company name
    ///
    /// # Returns
    /// The stored token record with its owner snapshot
    ///
    /// # Errors
    /// * `TokenNotFound` - No token with this digest exists
    /// * `TokenCompanyMismatch` - Token belongs to another company
    /// * `DatabaseError` - Database operation failed
    pub async fn resolve_for_company(
        &self,
        token: &str,
        company_name: &CompanyName,
    ) -> Result<Token, CredentialError> {
        let token = self.resolve(token).await?;

        if token.company.name != *company_name {
            return Err(CredentialError::TokenCompanyMismatch(
                company_name.as_str().to_string(),
            ));
        }

        Ok(token)
    }

    /// List a company's tokens, most recent first.
    ///
    /// # Arguments
    /// * `company_id` - Owning company ID
    ///
    /// # Returns
    /// Tokens ordered by creation time descending
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    pub async fn list_for_company(
        &self,
        company_id: &CompanyId,
    ) -> Result<Vec<Token>, CredentialError> {
        self.repository.list_for_company(company_id).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;

    mock! {
        pub TestTokenRepository {}

        #[async_trait::async_trait]
        impl TokenRepository for TestTokenRepository {
            async fn create(&self, token: Token) -> Result<Token, CredentialError>;
            async fn find_by_hash(&self, token_hash: &str) -> Result<Option<Token>, CredentialError>;
            async fn list_for_company(&self, company_id: &CompanyId) -> Result<Vec<Token>, CredentialError>;
            async fn set_active(&self, id: &TokenId, active: bool) -> Result<(), CredentialError>;
        }
    }

    fn company(name: &str, active: bool) -> Company {
        Company {
            id: CompanyId::new(),
            name: CompanyName::new(name.to_string()).unwrap(),
            password_hash: "digest".to_string(),
            active,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_issue_persists_digest_not_plaintext() {
        let mut repository = MockTestTokenRepository::new();

        repository
            .expect_create()
            .withf(|token| {
                token.active
                    && token.token_hash.len() == 64
                    && token.token_hash.chars().all(|c| c.is_ascii_hexdigit())
            })
            .times(1)
            .returning(|token| Ok(token));

        let store = TokenStore::new(Arc::new(repository));
        let owner = company("Acme", true);

        let (token, secret) = store.issue(&owner).await.unwrap();
        assert!(!secret.is_empty());
        assert_ne!(token.token_hash, secret);
        assert_eq!(token.company.id, owner.id);
    }

    #[tokio::test]
    async fn test_resolve_roundtrip() {
        let mut repository = MockTestTokenRepository::new();
        repository
            .expect_create()
            .times(1)
            .returning(|token| Ok(token));

        let store = TokenStore::new(Arc::new(repository));
        let owner = company("Acme", true);
        let (issued, secret) = store.issue(&owner).await.unwrap();

        let mut repository = MockTestTokenRepository::new();
        let stored = issued.clone();
        let expected_hash = issued.token_hash.clone();
        repository
            .expect_find_by_hash()
            .withf(move |hash| hash == expected_hash)
            .times(1)
            .returning(move |_| Ok(Some(stored.clone())));

        let store = TokenStore::new(Arc::new(repository));
        let resolved = store.resolve(&secret).await.unwrap();
        assert_eq!(resolved.id, issued.id);
        assert_eq!(resolved.token_hash, issued.token_hash);
    }

    #[tokio::test]
    async fn test_resolve_unknown_token() {
        let mut repository = MockTestTokenRepository::new();
        repository
            .expect_find_by_hash()
            .times(1)
            .returning(|_| Ok(None));

        let store = TokenStore::new(Arc::new(repository));

        let result = store.resolve("never-issued").await;
        assert!(matches!(
            result.unwrap_err(),
            CredentialError::TokenNotFound
        ));
    }

    #[tokio::test]
    async fn test_resolve_for_company_mismatch_is_distinct_from_not_found() {
        let owner = company("Acme", true);
        let stored = Token {
            id: TokenId::new(),
            token_hash: "digest".to_string(),
            company: TokenOwner::from(&owner),
            active: true,
            created_at: Utc::now(),
        };

        let mut repository = MockTestTokenRepository::new();
        repository
            .expect_find_by_hash()
            .times(1)
            .returning(move |_| Ok(Some(stored.clone())));

        let store = TokenStore::new(Arc::new(repository));
        let other = CompanyName::new("OtherCo".to_string()).unwrap();

        let result = store.resolve_for_company("some-token", &other).await;
        assert!(matches!(
            result.unwrap_err(),
            CredentialError::TokenCompanyMismatch(name) if name == "OtherCo"
        ));
    }

    #[tokio::test]
    async fn test_resolve_for_company_accepts_owner() {
        let owner = company("Acme", true);
        let stored = Token {
            id: TokenId::new(),
            token_hash: "digest".to_string(),
            company: TokenOwner::from(&owner),
            active: true,
            created_at: Utc::now(),
        };

        let returned = stored.clone();
        let mut repository = MockTestTokenRepository::new();
        repository
            .expect_find_by_hash()
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));

        let store = TokenStore::new(Arc::new(repository));

        let result = store
            .resolve_for_company("some-token", &owner.name)
            .await
            .unwrap();
        assert_eq!(result.id, stored.id);
    }

    #[tokio::test]
    async fn test_list_for_company_delegates_to_repository() {
        let owner = company("Acme", true);
        let owner_id = owner.id;

        let mut repository = MockTestTokenRepository::new();
        repository
            .expect_list_for_company()
            .withf(move |id| *id == owner_id)
            .times(1)
            .returning(|_| Ok(vec![]));

        let store = TokenStore::new(Arc::new(repository));
        let tokens = store.list_for_company(&owner_id).await.unwrap();
        assert!(tokens.is_empty());
    }
}
