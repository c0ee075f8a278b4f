//! NestEgg - personal finance bookkeeping core
//!
//! This library implements the lifecycle of the two records at the heart of
//! a personal finance tracker: bank accounts and spending categories. Both
//! are reachable from a CLI and from a small HTTP API, and every operation
//! answers with the same response envelope.
//!
//! # Architecture
//!
//! - `config`: Paths and settings
//! - `error`: Domain errors and their closed set of kinds
//! - `models`: Accounts, categories, identifiers and money
//! - `storage`: JSON file repositories behind the `RecordStore` trait
//! - `validation` / `lookup`: Identifier parsing and record resolution
//! - `services`: Account and category lifecycle rules
//! - `response`: The `ApiResponse` envelope
//! - `cli` / `api`: Transports
//!
//! # Example
//!
//! ```rust,ignore
//! use nestegg::config::NestEggPaths;
//! use nestegg::models::CategoryRequest;
//! use nestegg::services::CategoryService;
//! use nestegg::storage::Storage;
//!
//! let mut storage = Storage::new(NestEggPaths::new()?)?;
//! storage.load_all()?;
//!
//! let response = CategoryService::new(&storage.categories).create(CategoryRequest {
//!     name: "Groceries".into(),
//!     description: "Food at home".into(),
//! })?;
//! assert_eq!(response.status_code, 201);
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod lookup;
pub mod models;
pub mod response;
pub mod services;
pub mod storage;
pub mod validation;

pub use error::{NestEggError, NestEggResult};
pub use response::ApiResponse;
