//! Core data models for NestEgg
//!
//! This module contains the data structures of the bookkeeping domain: accounts,
//! categories, their identifiers and read views.

pub mod account;
pub mod category;
pub mod ids;
pub mod money;

use std::fmt;
use std::hash::Hash;

use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

pub use account::{Account, AccountRequest, AccountType, AccountView};
pub use category::{Category, CategoryRequest, CategoryStatus, CategoryView};
pub use ids::{AccountId, CategoryId};
pub use money::{Money, ParseMoneyError};

/// An entity kept by a record store: identified by an ID, unique by name
pub trait Record: Clone + Serialize + DeserializeOwned {
    type Id: Copy + Eq + Hash + fmt::Display + From<Uuid>;

    /// Human-readable entity kind, used in error messages
    const ENTITY: &'static str;

    fn id(&self) -> Self::Id;

    fn name(&self) -> &str;
}
