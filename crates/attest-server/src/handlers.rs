//! HTTP request handlers for the verification service.
//!
//! Implements the verify and health check endpoints using axum. The
//! handlers are a thin shell: all decision logic lives in the pipeline.

use attest_domain::TrustReport;
use attest_pipeline::TrustPipeline;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared application state
///
/// The pipeline is built once at startup and only ever read, so it is
/// shared without locks.
#[derive(Clone)]
pub struct AppState {
    /// The verification pipeline
    pub pipeline: Arc<TrustPipeline>,
}

/// Verification request body
#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    /// The AI-generated text to verify
    pub text: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Service health status
    pub status: String,
    /// Service name
    pub service: String,
    /// Service version
    pub version: String,
}

/// Service info served at the root route
#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceInfo {
    /// Service name
    pub service: String,
    /// Service version
    pub version: String,
    /// One-line description
    pub description: String,
    /// Number of knowledge base entries loaded
    pub knowledge_entries: usize,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// The request carried no usable text
    EmptyText,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::EmptyText => (
                StatusCode::BAD_REQUEST,
                "Text cannot be empty. Please provide AI-generated content to verify.".to_string(),
            ),
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

/// POST /verify - Run the verification pipeline on the request text
async fn verify(
    State(state): State<AppState>,
    Json(request): Json<VerifyRequest>,
) -> Result<Json<TrustReport>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::EmptyText);
    }

    Ok(Json(state.pipeline.run(&request.text)))
}

/// GET /health - Liveness check
async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        service: "attest".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET / - Basic service information
async fn root(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: "attest".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: "Verify AI-generated content for factual accuracy".to_string(),
        knowledge_entries: state.pipeline.knowledge_base().len(),
    })
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/verify", post(verify))
        .with_state(state)
}
