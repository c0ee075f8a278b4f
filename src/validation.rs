//! Identifier and input validators
//!
//! Pure helpers shared by every lifecycle operation.

use thiserror::Error;
use uuid::Uuid;

/// An external identifier that is not a UUID
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid identifier: {0}")]
pub struct MalformedIdentifier(pub String);

/// True if the string is empty or only whitespace
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Parse an external identifier into its canonical UUID form
pub fn parse_identifier(value: &str) -> Result<Uuid, MalformedIdentifier> {
    Uuid::parse_str(value).map_err(|_| MalformedIdentifier(value.to_string()))
}
