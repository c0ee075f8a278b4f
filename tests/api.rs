use std::io;
use std::sync::{Arc, Mutex};

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;
use tracing_subscriber::fmt::MakeWriter;

use nestegg::api::create_router;
use nestegg::config::NestEggPaths;
use nestegg::storage::Storage;

fn test_app() -> (TempDir, Arc<Storage>, Router) {
    let temp_dir = TempDir::new().unwrap();
    let paths = NestEggPaths::with_base_dir(temp_dir.path().to_path_buf());
    let mut storage = Storage::new(paths).unwrap();
    storage.load_all().unwrap();
    let storage = Arc::new(storage);
    let router = create_router(Arc::clone(&storage));
    (temp_dir, storage, router)
}

fn test_router() -> (TempDir, Router) {
    let (temp_dir, _storage, router) = test_app();
    (temp_dir, router)
}

/// Collects formatted log output in memory
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_health() {
    let (_temp_dir, router) = test_router();
    let (status, body) = send(&router, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_account_endpoints() {
    let (_temp_dir, router) = test_router();

    let (status, body) = send(
        &router,
        Method::POST,
        "/accounts",
        Some(json!({"name": "Checking-1", "type": "SAVINGS", "branch": "HCM"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Account created successfully");
    assert_eq!(body["data"], Value::Null);
    assert_eq!(body["success"], true);

    let (status, body) = send(
        &router,
        Method::POST,
        "/accounts",
        Some(json!({"name": "Checking-1", "type": "CASH", "branch": "HN", "initialBalance": 5})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["statusCode"], 409);

    let (status, _) = send(
        &router,
        Method::POST,
        "/accounts",
        Some(json!({"name": "", "type": "CASH", "branch": "HN"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&router, Method::GET, "/accounts/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_account_update_and_toggle() {
    let (_temp_dir, storage, router) = test_app();

    let (status, _) = send(
        &router,
        Method::POST,
        "/accounts",
        Some(json!({"name": "Main", "type": "CHECKING", "branch": "HCM", "initialBalance": 700})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = storage.accounts.get_all().unwrap()[0].id.to_string();
    let uri = format!("/accounts/{}", id);

    let (status, body) = send(
        &router,
        Method::PUT,
        &uri,
        Some(json!({"name": "Main", "type": "SAVINGS", "branch": "HN"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Account updated successfully");

    let (status, _) = send(
        &router,
        Method::PUT,
        &uri,
        Some(json!({"name": "Main", "type": "SAVINGS", "branch": " "})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&router, Method::PATCH, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], id);
    assert_eq!(body["data"]["isActive"], false);

    let (_, body) = send(&router, Method::GET, &uri, None).await;
    assert_eq!(body["data"]["type"], "SAVINGS");
    assert_eq!(body["data"]["branch"], "HN");
    assert_eq!(body["data"]["currentBalance"], 700);

    let (status, _) = send(&router, Method::PATCH, "/accounts/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_large_balance_round_trips() {
    let (_temp_dir, storage, router) = test_app();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/accounts")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            r#"{"name":"Vault","type":"INVESTMENT","branch":"HCM","initialBalance":123456789012345678901234}"#,
        ))
        .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let id = storage.accounts.get_all().unwrap()[0].id.to_string();
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/accounts/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains(r#""currentBalance":123456789012345678901234"#));
}

#[tokio::test]
async fn test_requests_are_logged() {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .with_writer(logs.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let (_temp_dir, router) = test_router();
    let (status, _) = send(&router, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);

    let output = logs.contents();
    let line = output
        .lines()
        .find(|line| line.contains("Handled request"))
        .unwrap();
    assert!(line.contains("method=GET"));
    assert!(line.contains("path=/health"));
    assert!(line.contains("status=200"));
    assert!(line.contains("elapsed_ms="));
}

#[tokio::test]
async fn test_account_delete_after_resolve() {
    let (_temp_dir, router) = test_router();

    let (status, _) = send(
        &router,
        Method::DELETE,
        "/accounts/550e8400-e29b-41d4-a716-446655440000",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_category_endpoints() {
    let (_temp_dir, router) = test_router();

    let (status, body) = send(
        &router,
        Method::POST,
        "/categories",
        Some(json!({"name": "Rent", "description": "Monthly rent"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["data"]["id"].as_str().unwrap().to_string();
    let uri = format!("/categories/{}", id);

    let (status, body) = send(
        &router,
        Method::PUT,
        &uri,
        Some(json!({"name": "Rent", "description": "Flat rent"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], id);

    let (status, body) = send(&router, Method::PATCH, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["isActive"], false);

    let (status, _) = send(&router, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::ACCEPTED);

    let (status, body) = send(&router, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Category is already deleted");

    let (_, body) = send(&router, Method::GET, &uri, None).await;
    assert_eq!(body["data"]["description"], "Flat rent");
    assert_eq!(body["data"]["isDeleted"], true);

    let (status, _) = send(&router, Method::GET, "/categories", None).await;
    assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
}

#[tokio::test]
async fn test_malformed_body_and_unknown_route() {
    let (_temp_dir, router) = test_router();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/categories")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let (status, body) = send(&router, Method::GET, "/budgets", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["statusCode"], 404);
}
