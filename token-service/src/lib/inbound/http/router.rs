use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::issue_token::issue_token;
use super::handlers::register_company::register_company;
use super::handlers::validate_token::validate_token;
use crate::domain::credential::service::CredentialService;
use crate::outbound::repositories::company::PostgresCompanyRepository;
use crate::outbound::repositories::token::PostgresTokenRepository;

#[derive(Clone)]
pub struct AppState {
    pub credential_service:
        Arc<CredentialService<PostgresCompanyRepository, PostgresTokenRepository>>,
}

pub fn create_router(
    credential_service: Arc<CredentialService<PostgresCompanyRepository, PostgresTokenRepository>>,
) -> Router {
    let state = AppState { credential_service };

    // POST only on all three routes; axum answers anything else with 405.
    let api_routes = Router::new()
        .route("/api/companies/register", post(register_company))
        .route("/api/tokens", post(issue_token))
        .route("/api/tokens/validate", post(validate_token));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(api_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
