//! Request handlers
//!
//! Handlers only translate between HTTP and the services. Domain errors are
//! folded into the envelope by [`ApiResponse::from_result`].
//!
//! Service calls take the repository lock and write JSON files, so they run
//! on the blocking thread pool rather than on the async workers.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;

use super::routes::AppState;
use crate::error::NestEggResult;
use crate::models::{AccountRequest, CategoryRequest};
use crate::response::ApiResponse;
use crate::services::{AccountService, CategoryService};
use crate::storage::Storage;

fn malformed_body(rejection: JsonRejection) -> ApiResponse {
    tracing::warn!(error = %rejection.body_text(), "Rejected request body");
    ApiResponse::bad_request(format!("Malformed request body: {}", rejection.body_text()))
}

/// Run a service call off the async workers and fold it into an envelope
async fn run_blocking<F>(state: AppState, operation: F) -> ApiResponse
where
    F: FnOnce(&Storage) -> NestEggResult<ApiResponse> + Send + 'static,
{
    let storage = state.storage;
    match tokio::task::spawn_blocking(move || operation(&storage)).await {
        Ok(result) => ApiResponse::from_result(result),
        Err(err) => {
            tracing::error!(error = %err, "Blocking task failed");
            ApiResponse::internal_error()
        }
    }
}

/// POST /accounts
pub async fn create_account(
    State(state): State<AppState>,
    payload: Result<Json<AccountRequest>, JsonRejection>,
) -> ApiResponse {
    let Json(request) = match payload {
        Ok(body) => body,
        Err(rejection) => return malformed_body(rejection),
    };
    run_blocking(state, move |storage| {
        AccountService::new(&storage.accounts).create(request)
    })
    .await
}

/// PUT /accounts/{accountId}
pub async fn update_account(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
    payload: Result<Json<AccountRequest>, JsonRejection>,
) -> ApiResponse {
    let Json(request) = match payload {
        Ok(body) => body,
        Err(rejection) => return malformed_body(rejection),
    };
    run_blocking(state, move |storage| {
        AccountService::new(&storage.accounts).update(&account_id, request)
    })
    .await
}

/// PATCH /accounts/{accountId}
pub async fn toggle_account(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
) -> ApiResponse {
    run_blocking(state, move |storage| {
        AccountService::new(&storage.accounts).toggle_status(&account_id)
    })
    .await
}

/// GET /accounts/{accountId}
pub async fn get_account(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
) -> ApiResponse {
    run_blocking(state, move |storage| {
        AccountService::new(&storage.accounts).get(&account_id)
    })
    .await
}

/// DELETE /accounts/{accountId}
pub async fn delete_account(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
) -> ApiResponse {
    run_blocking(state, move |storage| {
        AccountService::new(&storage.accounts).delete(&account_id)
    })
    .await
}

/// POST /categories
pub async fn create_category(
    State(state): State<AppState>,
    payload: Result<Json<CategoryRequest>, JsonRejection>,
) -> ApiResponse {
    let Json(request) = match payload {
        Ok(body) => body,
        Err(rejection) => return malformed_body(rejection),
    };
    run_blocking(state, move |storage| {
        CategoryService::new(&storage.categories).create(request)
    })
    .await
}

/// GET /categories
pub async fn list_categories(State(state): State<AppState>) -> ApiResponse {
    run_blocking(state, |storage| {
        CategoryService::new(&storage.categories).get_all()
    })
    .await
}

/// PUT /categories/{categoryId}
pub async fn update_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
    payload: Result<Json<CategoryRequest>, JsonRejection>,
) -> ApiResponse {
    let Json(request) = match payload {
        Ok(body) => body,
        Err(rejection) => return malformed_body(rejection),
    };
    run_blocking(state, move |storage| {
        CategoryService::new(&storage.categories).update(&category_id, request)
    })
    .await
}

/// PATCH /categories/{categoryId}
pub async fn toggle_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> ApiResponse {
    run_blocking(state, move |storage| {
        CategoryService::new(&storage.categories).toggle_active(&category_id)
    })
    .await
}

/// GET /categories/{categoryId}
pub async fn get_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> ApiResponse {
    run_blocking(state, move |storage| {
        CategoryService::new(&storage.categories).get(&category_id)
    })
    .await
}

/// DELETE /categories/{categoryId}
pub async fn delete_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> ApiResponse {
    run_blocking(state, move |storage| {
        CategoryService::new(&storage.categories).soft_delete(&category_id)
    })
    .await
}
