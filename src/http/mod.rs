//! HTTP server for the agent.
//!
//! Routes:
//! - `GET /` banner
//! - `POST /api/agent/message` run the agent on a prompt

use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::{
    agent::{AgentReply, MarketAgent},
    error::{AppError, Result},
};

/// Shared state for request handlers.
#[derive(Clone)]
pub struct AppState {
    pub agent: Arc<MarketAgent>,
}

/// Body of `POST /api/agent/message`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentMessageRequest {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub is_rootstock: Option<bool>,
}

/// Error body returned with 4xx/5xx responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Errors surfaced to HTTP clients. Details stay in the logs.
#[derive(Debug)]
pub enum ApiError {
    InvalidPrompt,
    Internal,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InvalidPrompt => {
                (StatusCode::BAD_REQUEST, "Prompt is required and must be a string")
            }
            ApiError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        };
        (status, Json(ErrorBody { error: message.to_string() })).into_response()
    }
}

/// Build the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(banner))
        .route("/api/agent/message", post(agent_message))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `addr` and serve until ctrl-c.
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Transport(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!(addr = %addr, "Agent server listening");

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Received shutdown signal, stopping agent server");
        })
        .await
        .map_err(|e| AppError::Transport(format!("Server error: {}", e)))
}

async fn banner() -> &'static str {
    concat!("night-market-agent ", env!("CARGO_PKG_VERSION"))
}

async fn agent_message(
    State(state): State<AppState>,
    payload: std::result::Result<Json<AgentMessageRequest>, JsonRejection>,
) -> std::result::Result<Json<AgentReply>, ApiError> {
    let Json(body) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected agent request body");
        ApiError::InvalidPrompt
    })?;

    let prompt = body
        .prompt
        .filter(|p| !p.trim().is_empty())
        .ok_or(ApiError::InvalidPrompt)?;

    tracing::info!(prompt_len = prompt.len(), is_rootstock = ?body.is_rootstock, "Agent message");

    state.agent.run(&prompt, body.is_rootstock).await.map(Json).map_err(|e| {
        tracing::error!(error = %e, "Agent run failed");
        ApiError::Internal
    })
}
