use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::credential::models::CompanyName;
use crate::domain::credential::models::IssuedToken;
use crate::domain::credential::models::IssueTokenCommand;
use crate::domain::credential::ports::CredentialServicePort;
use crate::inbound::http::router::AppState;

const ISSUED_MESSAGE: &str =
    "Token generated successfully. Please save your token - it will not be shown again.";

pub async fn issue_token(
    State(state): State<AppState>,
    Json(body): Json<IssueTokenRequest>,
) -> Result<ApiSuccess<IssueTokenResponseData>, ApiError> {
    state
        .credential_service
        .issue_token(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref issued| ApiSuccess::new(StatusCode::CREATED, issued.into()))
}

/// HTTP request body for issuing a token (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IssueTokenRequest {
    company_name: String,
    password: String,
}

impl IssueTokenRequest {
    // A malformed name cannot possibly authenticate; report it the same
    // opaque way as any other bad credential.
    fn try_into_command(self) -> Result<IssueTokenCommand, ApiError> {
        let company_name = CompanyName::new(self.company_name)
            .map_err(|_| ApiError::BadRequest("Invalid credentials".to_string()))?;
        Ok(IssueTokenCommand::new(company_name, self.password))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueTokenResponseData {
    pub token: String,
    pub company_name: String,
    pub created_at: DateTime<Utc>,
    pub message: String,
}

impl From<&IssuedToken> for IssueTokenResponseData {
    fn from(issued: &IssuedToken) -> Self {
        Self {
            token: issued.secret.clone(),
            company_name: issued.token.company.name.as_str().to_string(),
            created_at: issued.token.created_at,
            message: ISSUED_MESSAGE.to_string(),
        }
    }
}
