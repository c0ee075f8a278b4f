//! Service layer for NestEgg
//!
//! Services hold the lifecycle rules for accounts and categories. Each one
//! borrows a [`RecordStore`](crate::storage::RecordStore) and answers with an
//! [`ApiResponse`](crate::response::ApiResponse) or a domain error.

pub mod account;
pub mod category;

pub use account::AccountService;
pub use category::CategoryService;
