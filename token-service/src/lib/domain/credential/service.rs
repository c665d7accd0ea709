use std::sync::Arc;

use async_trait::async_trait;

use crate::credential::errors::CredentialError;
use crate::domain::credential::directory::CompanyDirectory;
use crate::domain::credential::models::CompanyName;
use crate::domain::credential::models::IssuedToken;
use crate::domain::credential::models::IssueTokenCommand;
use crate::domain::credential::models::RegisterCompanyCommand;
use crate::domain::credential::models::RegisteredCompany;
use crate::domain::credential::models::Token;
use crate::domain::credential::models::TokenValidity;
use crate::domain::credential::ports::CompanyRepository;
use crate::domain::credential::ports::CredentialServicePort;
use crate::domain::credential::ports::TokenRepository;
use crate::domain::credential::store::TokenStore;

/// Credential orchestration service.
///
/// Concrete implementation of CredentialServicePort, wiring the company
/// directory and the token store into the three external use cases.
pub struct CredentialService<CR, TR>
where
    CR: CompanyRepository,
    TR: TokenRepository,
{
    directory: CompanyDirectory<CR>,
    tokens: TokenStore<TR>,
}

impl<CR, TR> CredentialService<CR, TR>
where
    CR: CompanyRepository,
    TR: TokenRepository,
{
    /// Create a new credential service with injected repositories.
    ///
    /// # Arguments
    /// * `company_repository` - Company persistence implementation
    /// * `token_repository` - Token persistence implementation
    ///
    /// # Returns
    /// Configured credential service instance
    pub fn new(company_repository: Arc<CR>, token_repository: Arc<TR>) -> Self {
        Self {
            directory: CompanyDirectory::new(company_repository),
            tokens: TokenStore::new(token_repository),
        }
    }
}

#[async_trait]
impl<CR, TR> CredentialServicePort for CredentialService<CR, TR>
where
    CR: CompanyRepository,
    TR: TokenRepository,
{
    async fn register_company(
        &self,
        command: RegisterCompanyCommand,
    ) -> Result<RegisteredCompany, CredentialError> {
        let (company, password) = self.directory.register(command.name).await?;

        Ok(RegisteredCompany { company, password })
    }

    async fn issue_token(
        &self,
        command: IssueTokenCommand,
    ) -> Result<IssuedToken, CredentialError> {
        let company = self
            .directory
            .authenticate(&command.company_name, &command.password)
            .await?;

        let (token, secret) = self.tokens.issue(&company).await?;

        Ok(IssuedToken { token, secret })
    }

    async fn validate_token(
        &self,
        token: &str,
        company_name: Option<&CompanyName>,
    ) -> Result<Token, CredentialError> {
        let token = match company_name {
            Some(name) => self.tokens.resolve_for_company(token, name).await?,
            None => self.tokens.resolve(token).await?,
        };

        match token.validity() {
            TokenValidity::Valid => Ok(token),
            TokenValidity::InactiveToken => Err(CredentialError::TokenInactive),
            TokenValidity::InactiveCompanyOwner => Err(CredentialError::CompanyInactive),
        }
    }
}
