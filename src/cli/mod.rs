//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer. Every entity
//! command ends in an [`ApiResponse`] printed to stdout as JSON.

pub mod account;
pub mod category;

pub use account::{handle_account_command, AccountCommands};
pub use category::{handle_category_command, CategoryCommands};

use crate::error::NestEggResult;
use crate::response::ApiResponse;

/// Print an envelope as pretty JSON
pub fn print_response(response: &ApiResponse) -> NestEggResult<()> {
    println!("{}", serde_json::to_string_pretty(response)?);
    Ok(())
}
