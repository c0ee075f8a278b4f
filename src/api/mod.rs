//! HTTP transport
//!
//! Exposes the account and category services over axum. Every endpoint
//! answers with the [`ApiResponse`] envelope; its `statusCode` is also the
//! HTTP status.

pub mod handlers;
pub mod routes;

use std::sync::Arc;

use anyhow::Context;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tokio::net::TcpListener;

use crate::response::ApiResponse;
use crate::storage::Storage;

pub use routes::{create_router, AppState};

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Bind `address` and serve until Ctrl-C
pub async fn serve(storage: Arc<Storage>, address: &str) -> anyhow::Result<()> {
    let listener = TcpListener::bind(address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    tracing::info!("NestEgg API listening on http://{}", address);

    axum::serve(listener, create_router(storage))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("NestEgg API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for Ctrl-C");
        return;
    }
    tracing::info!("Shutdown signal received");
}
