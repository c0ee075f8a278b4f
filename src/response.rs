//! Uniform response envelope
//!
//! Every operation, successful or not, is reported to the transport layer as
//! an [`ApiResponse`]:
//!
//! ```json
//! {
//!     "statusCode": 201,
//!     "message": "Category created successfully",
//!     "data": { "id": "..." },
//!     "success": true,
//!     "timestamp": "2025-01-01T00:00:00Z"
//! }
//! ```
//!
//! Domain errors are turned into envelopes exactly once, by
//! [`ApiResponse::from_result`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::error::{ErrorKind, NestEggError, NestEggResult};

/// Message shown for failures the caller cannot act on
pub const INTERNAL_ERROR_MESSAGE: &str =
    "Internal server error occurred. Please contact support if the problem persists.";

/// The response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub status_code: u16,
    pub message: String,
    pub data: Option<serde_json::Value>,
    pub success: bool,
    pub timestamp: DateTime<Utc>,
}

impl ApiResponse {
    fn new(status_code: u16, message: impl Into<String>, data: Option<serde_json::Value>) -> Self {
        Self {
            status_code,
            message: message.into(),
            data,
            success: (200..300).contains(&status_code),
            timestamp: Utc::now(),
        }
    }

    fn with_data<T: Serialize>(status_code: u16, message: &str, data: &T) -> NestEggResult<Self> {
        Ok(Self::new(status_code, message, Some(serde_json::to_value(data)?)))
    }

    /// 200 without payload
    pub fn ok(message: impl Into<String>) -> Self {
        Self::new(200, message, None)
    }

    /// 200 with payload
    pub fn ok_with<T: Serialize>(message: &str, data: &T) -> NestEggResult<Self> {
        Self::with_data(200, message, data)
    }

    /// 201 without payload
    pub fn created(message: impl Into<String>) -> Self {
        Self::new(201, message, None)
    }

    /// 201 with payload
    pub fn created_with<T: Serialize>(message: &str, data: &T) -> NestEggResult<Self> {
        Self::with_data(201, message, data)
    }

    /// 202: the request was taken, nothing to return
    pub fn accepted(message: impl Into<String>) -> Self {
        Self::new(202, message, None)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(400, message, None)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(404, message, None)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(409, message, None)
    }

    pub fn internal_error() -> Self {
        Self::new(500, INTERNAL_ERROR_MESSAGE, None)
    }

    /// 501: the operation exists in the contract but is not offered yet
    pub fn not_implemented(message: impl Into<String>) -> Self {
        Self::new(501, message, None)
    }

    /// Convert a domain error into its envelope.
    ///
    /// Internal failures are logged with their cause and reported generically.
    pub fn from_error(err: &NestEggError) -> Self {
        match err.kind() {
            ErrorKind::InvalidInput => Self::bad_request(err.to_string()),
            ErrorKind::Conflict => Self::conflict(err.to_string()),
            ErrorKind::NotFound => Self::not_found(err.to_string()),
            ErrorKind::Internal => {
                error!(error = %err, "Internal error while handling request");
                Self::internal_error()
            }
        }
    }

    /// Collapse an operation result into a single envelope
    pub fn from_result(result: NestEggResult<ApiResponse>) -> Self {
        result.unwrap_or_else(|err| Self::from_error(&err))
    }
}
