use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::credential::errors::CompanyNameError;
use crate::domain::credential::models::CompanyName;
use crate::domain::credential::models::RegisterCompanyCommand;
use crate::domain::credential::models::RegisteredCompany;
use crate::domain::credential::ports::CredentialServicePort;
use crate::inbound::http::router::AppState;

const REGISTERED_MESSAGE: &str =
    "Company registered successfully. Please save your password - it will not be shown again.";

pub async fn register_company(
    State(state): State<AppState>,
    Json(body): Json<RegisterCompanyRequest>,
) -> Result<ApiSuccess<RegisterCompanyResponseData>, ApiError> {
    state
        .credential_service
        .register_company(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref registered| ApiSuccess::new(StatusCode::CREATED, registered.into()))
}

/// HTTP request body for registering a company (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterCompanyRequest {
    company_name: String,
}

impl RegisterCompanyRequest {
    fn try_into_command(self) -> Result<RegisterCompanyCommand, CompanyNameError> {
        let name = CompanyName::new(self.company_name)?;
        Ok(RegisterCompanyCommand::new(name))
    }
}

impl From<CompanyNameError> for ApiError {
    fn from(err: CompanyNameError) -> Self {
        ApiError::Validation {
            field: "company_name",
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterCompanyResponseData {
    pub company_name: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub message: String,
}

impl From<&RegisteredCompany> for RegisterCompanyResponseData {
    fn from(registered: &RegisteredCompany) -> Self {
        Self {
            company_name: registered.company.name.as_str().to_string(),
            password: registered.password.clone(),
            created_at: registered.company.created_at,
            message: REGISTERED_MESSAGE.to_string(),
        }
    }
}
