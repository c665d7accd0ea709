use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiResponseBody;
use crate::credential::errors::CredentialError;
use crate::domain::credential::models::CompanyName;
use crate::domain::credential::models::Token;
use crate::domain::credential::ports::CredentialServicePort;
use crate::inbound::http::router::AppState;

const VALID_MESSAGE: &str = "Token is valid";
const INVALID_MESSAGE: &str = "Token is invalid or inactive";

/// Validate a presented token, optionally scoped to a company.
///
/// The boundary collapses every invalid case (not found, inactive
/// token, inactive company, wrong company) into one uniform body; the
/// distinct internal kinds are only logged.
pub async fn validate_token(
    State(state): State<AppState>,
    Json(body): Json<ValidateTokenRequest>,
) -> Result<(StatusCode, Json<ApiResponseBody<ValidateTokenResponseData>>), ApiError> {
    // An unparsable company name can never own a token; uniform body.
    let company_name = match body.company_name {
        Some(name) => match CompanyName::new(name) {
            Ok(name) => Some(name),
            Err(_) => return Ok(response(StatusCode::BAD_REQUEST, false, INVALID_MESSAGE)),
        },
        None => None,
    };

    into_validation_response(
        state
            .credential_service
            .validate_token(&body.token, company_name.as_ref())
            .await,
    )
}

/// Collapse the validation outcome into the uniform boundary body.
///
/// Every invalid kind produces the identical 400 body; only
/// infrastructure failures escape as an ApiError.
fn into_validation_response(
    result: Result<Token, CredentialError>,
) -> Result<(StatusCode, Json<ApiResponseBody<ValidateTokenResponseData>>), ApiError> {
    match result {
        Ok(_) => Ok(response(StatusCode::OK, true, VALID_MESSAGE)),
        Err(
            reason @ (CredentialError::TokenNotFound
            | CredentialError::TokenInactive
            | CredentialError::CompanyInactive
            | CredentialError::TokenCompanyMismatch(_)),
        ) => {
            tracing::debug!(%reason, "Token rejected");
            Ok(response(StatusCode::BAD_REQUEST, false, INVALID_MESSAGE))
        }
        Err(err) => Err(ApiError::from(err)),
    }
}

fn response(
    status: StatusCode,
    valid: bool,
    message: &str,
) -> (StatusCode, Json<ApiResponseBody<ValidateTokenResponseData>>) {
    (
        status,
        Json(ApiResponseBody::new(
            status,
            ValidateTokenResponseData {
                valid,
                message: message.to_string(),
            },
        )),
    )
}

/// HTTP request body for validating a token (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ValidateTokenRequest {
    token: String,
    #[serde(default)]
    company_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidateTokenResponseData {
    pub valid: bool,
    pub message: String,
}
