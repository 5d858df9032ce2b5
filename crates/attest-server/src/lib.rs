//! Attest Server
//!
//! Thin HTTP shell around the verification pipeline: `POST /verify` runs
//! the pipeline on the request text, `GET /health` reports liveness. The
//! knowledge base is loaded once at startup; load failure is fatal, so a
//! process without a valid knowledge base never serves requests.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;

use attest_pipeline::{PipelineError, TrustPipeline};
use attest_verifier::{KnowledgeBase, KnowledgeError};
use config::ServerConfig;
use handlers::{create_router, AppState};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Knowledge base load error
    #[error("Knowledge base error: {0}")]
    Knowledge(#[from] KnowledgeError),

    /// Pipeline construction error
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Start the verification HTTP server
///
/// Loads the knowledge base, builds the pipeline, and starts the axum
/// server. Any failure before serving is fatal by design.
pub async fn start_server(config: ServerConfig) -> Result<(), ServerError> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting attest server");
    info!("Bind address: {}", config.bind_addr());

    // Load the knowledge base; a process without one must not serve
    let kb = match &config.knowledge_base {
        Some(path) => KnowledgeBase::from_file(path)?,
        None => KnowledgeBase::builtin(),
    };
    info!("Knowledge base ready: {} entries", kb.len());

    // Build the pipeline once; requests share it read-only
    let pipeline = TrustPipeline::new(kb, config.pipeline.clone())?;

    let state = AppState {
        pipeline: Arc::new(pipeline),
    };

    let app = create_router(state);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("attest listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    Ok(())
}
