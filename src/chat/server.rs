use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::body::Bytes;
use axum::routing::{get, post};
use axum::{Json, Router};
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use super::error::ChatError;
use super::reply::{PaperContext, compose_reply};

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ChatReply {
    pub reply: String,
}

pub fn chat_router() -> Router {
    Router::new()
        .route("/api/chat", post(chat_handler))
        .route("/api/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
}

/// Parses a raw request body and formats the reply.
///
/// The body must be a JSON object. `message` must be a non-blank string;
/// `paper` is optional and may be `null`.
pub fn answer<R: Rng + ?Sized>(body: &[u8], rng: &mut R) -> Result<ChatReply, ChatError> {
    let request: Value = serde_json::from_slice(body)?;

    let message = request
        .get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|message| !message.is_empty())
        .ok_or(ChatError::MissingMessage)?;

    let paper = match request.get("paper") {
        None | Some(Value::Null) => PaperContext::default(),
        Some(raw) => PaperContext::deserialize(raw)?,
    };

    debug!(
        message_len = message.len(),
        has_title = paper.title.is_some(),
        "composing chat reply"
    );

    Ok(ChatReply {
        reply: compose_reply(message, &paper, rng),
    })
}

async fn chat_handler(body: Bytes) -> Result<Json<ChatReply>, ChatError> {
    let reply = answer(&body, &mut rand::thread_rng())?;
    Ok(Json(reply))
}

async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Serves the chat endpoint until ctrl-c.
pub async fn serve(addr: SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind chat endpoint on {addr}"))?;
    info!(%addr, "chat endpoint listening");

    axum::serve(listener, chat_router())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("chat endpoint stopped unexpectedly")?;

    info!("chat endpoint shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        warn!(%error, "failed to listen for ctrl-c; serving until killed");
        std::future::pending::<()>().await;
    }
}
