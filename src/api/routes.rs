//! Route configuration
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | POST | /accounts | `create_account` |
//! | PUT, PATCH | /accounts/{accountId} | `update_account`, `toggle_account` |
//! | GET, DELETE | /accounts/{accountId} | `get_account`, `delete_account` |
//! | POST, GET | /categories | `create_category`, `list_categories` |
//! | PUT, PATCH | /categories/{categoryId} | `update_category`, `toggle_category` |
//! | GET, DELETE | /categories/{categoryId} | `get_category`, `delete_category` |
//! | GET | /health | `health_check` |

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Uri};
use axum::response::Response;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::{
    create_account, create_category, delete_account, delete_category, get_account, get_category,
    list_categories, toggle_account, toggle_category, update_account, update_category,
};
use crate::response::ApiResponse;
use crate::storage::Storage;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<Storage>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn unknown_route(uri: Uri) -> ApiResponse {
    ApiResponse::not_found(format!("No route for {}", uri.path()))
}

/// Build the router over a loaded storage
pub fn create_router(storage: Arc<Storage>) -> Router {
    Router::new()
        .route("/accounts", post(create_account))
        .route(
            "/accounts/{account_id}",
            get(get_account)
                .put(update_account)
                .patch(toggle_account)
                .delete(delete_account),
        )
        .route("/categories", post(create_category).get(list_categories))
        .route(
            "/categories/{category_id}",
            get(get_category)
                .put(update_category)
                .patch(toggle_category)
                .delete(delete_category),
        )
        .route("/health", get(health_check))
        .fallback(unknown_route)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    tracing::info_span!(
                        "request",
                        method = %request.method(),
                        path = %request.uri().path()
                    )
                })
                .on_response(|response: &Response, latency: Duration, _span: &Span| {
                    tracing::info!(
                        status = response.status().as_u16(),
                        elapsed_ms = latency.as_millis() as u64,
                        "Handled request"
                    );
                }),
        )
        .with_state(AppState { storage })
}
