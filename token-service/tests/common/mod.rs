use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use token_service::credential::errors::CredentialError;
use token_service::domain::credential::models::Company;
use token_service::domain::credential::models::CompanyId;
use token_service::domain::credential::models::CompanyName;
use token_service::domain::credential::models::Token;
use token_service::domain::credential::models::TokenId;
use token_service::domain::credential::ports::CompanyRepository;
use token_service::domain::credential::ports::TokenRepository;

/// In-memory company store with the same contract as the Postgres
/// repository: create-if-absent is atomic under the lock.
#[derive(Default)]
pub struct InMemoryCompanyRepository {
    companies: Mutex<HashMap<String, Company>>,
}

impl InMemoryCompanyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn find_by_id(&self, id: &CompanyId) -> Option<Company> {
        self.companies
            .lock()
            .unwrap()
            .values()
            .find(|c| c.id == *id)
            .cloned()
    }
}

#[async_trait]
impl CompanyRepository for InMemoryCompanyRepository {
    async fn create(&self, company: Company) -> Result<Company, CredentialError> {
        let mut companies = self.companies.lock().unwrap();
        if companies.contains_key(company.name.as_str()) {
            return Err(CredentialError::DuplicateName(
                company.name.as_str().to_string(),
            ));
        }
        companies.insert(company.name.as_str().to_string(), company.clone());
        Ok(company)
    }

    async fn find_by_name(&self, name: &CompanyName) -> Result<Option<Company>, CredentialError> {
        Ok(self.companies.lock().unwrap().get(name.as_str()).cloned())
    }

    async fn set_active(&self, id: &CompanyId, active: bool) -> Result<(), CredentialError> {
        let mut companies = self.companies.lock().unwrap();
        let company = companies
            .values_mut()
            .find(|c| c.id == *id)
            .ok_or_else(|| CredentialError::DatabaseError(format!("no company with id {id}")))?;
        company.active = active;
        Ok(())
    }
}

/// In-memory token store. Loads rebuild the owner snapshot from the
/// company store, mirroring the join the Postgres repository does.
pub struct InMemoryTokenRepository {
    tokens: Mutex<Vec<Token>>,
    companies: Arc<InMemoryCompanyRepository>,
}

impl InMemoryTokenRepository {
    pub fn new(companies: Arc<InMemoryCompanyRepository>) -> Self {
        Self {
            tokens: Mutex::new(Vec::new()),
            companies,
        }
    }

    fn with_fresh_owner(&self, token: &Token) -> Token {
        let mut token = token.clone();
        if let Some(company) = self.companies.find_by_id(&token.company.id) {
            token.company.active = company.active;
            token.company.name = company.name;
        }
        token
    }
}

#[async_trait]
impl TokenRepository for InMemoryTokenRepository {
    async fn create(&self, token: Token) -> Result<Token, CredentialError> {
        let mut tokens = self.tokens.lock().unwrap();
        if tokens.iter().any(|t| t.token_hash == token.token_hash) {
            return Err(CredentialError::DatabaseError(
                "duplicate token hash".to_string(),
            ));
        }
        tokens.push(token.clone());
        Ok(token)
    }

    async fn find_by_hash(&self, token_hash: &str) -> Result<Option<Token>, CredentialError> {
        Ok(self
            .tokens
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.token_hash == token_hash)
            .map(|t| self.with_fresh_owner(t)))
    }

    async fn list_for_company(
        &self,
        company_id: &CompanyId,
    ) -> Result<Vec<Token>, CredentialError> {
        let mut tokens: Vec<Token> = self
            .tokens
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.company.id == *company_id)
            .map(|t| self.with_fresh_owner(t))
            .collect();
        tokens.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(tokens)
    }

    async fn set_active(&self, id: &TokenId, active: bool) -> Result<(), CredentialError> {
        let mut tokens = self.tokens.lock().unwrap();
        let token = tokens
            .iter_mut()
            .find(|t| t.id == *id)
            .ok_or_else(|| CredentialError::DatabaseError(format!("no token with id {id}")))?;
        token.active = active;
        Ok(())
    }
}
