//! Account model
//!
//! Represents cash holdings (checking, savings, credit lines, etc.) with a
//! running balance.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AccountId;
use super::money::Money;
use super::Record;

/// Type of financial account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    /// Checking account
    Checking,
    /// Savings account
    Savings,
    /// Credit card
    Credit,
    /// Cash/wallet
    Cash,
    /// Investment account
    Investment,
    /// Line of credit
    LineOfCredit,
    /// Other account type
    Other,
}

impl AccountType {
    /// Parse account type from string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "checking" => Some(Self::Checking),
            "savings" => Some(Self::Savings),
            "credit" | "credit_card" | "creditcard" => Some(Self::Credit),
            "cash" => Some(Self::Cash),
            "investment" => Some(Self::Investment),
            "line_of_credit" | "lineofcredit" | "loc" => Some(Self::LineOfCredit),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    /// Canonical wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Checking => "CHECKING",
            Self::Savings => "SAVINGS",
            Self::Credit => "CREDIT",
            Self::Cash => "CASH",
            Self::Investment => "INVESTMENT",
            Self::LineOfCredit => "LINE_OF_CREDIT",
            Self::Other => "OTHER",
        }
    }
}

impl Default for AccountType {
    fn default() -> Self {
        Self::Checking
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A financial account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier
    pub id: AccountId,

    /// Account name, unique across all accounts
    pub name: String,

    /// Type of account
    #[serde(rename = "type")]
    pub account_type: AccountType,

    /// Bank branch holding the account
    pub branch: String,

    /// Balance right now
    pub current_balance: Money,

    /// Balance the account was opened with
    pub initial_balance: Money,

    /// Whether this account is active
    pub active: bool,

    /// When the account was created
    pub created_at: DateTime<Utc>,

    /// When the account was last modified
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new, active account whose current balance equals the initial one
    pub fn new(
        name: impl Into<String>,
        account_type: AccountType,
        branch: impl Into<String>,
        initial_balance: Money,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: AccountId::new(),
            name: name.into(),
            account_type,
            branch: branch.into(),
            current_balance: initial_balance,
            initial_balance,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the editable details of this account
    pub fn apply_details(
        &mut self,
        name: impl Into<String>,
        account_type: AccountType,
        branch: impl Into<String>,
    ) {
        self.name = name.into();
        self.account_type = account_type;
        self.branch = branch.into();
        self.updated_at = Utc::now();
    }

    /// Flip the active flag, returning the new value
    pub fn toggle_active(&mut self) -> bool {
        self.active = !self.active;
        self.updated_at = Utc::now();
        self.active
    }

    /// Validate the account
    pub fn validate(&self) -> Result<(), AccountValidationError> {
        if self.name.trim().is_empty() {
            return Err(AccountValidationError::EmptyName);
        }

        if self.name.chars().count() > 100 {
            return Err(AccountValidationError::NameTooLong(self.name.chars().count()));
        }

        if self.branch.trim().is_empty() {
            return Err(AccountValidationError::EmptyBranch);
        }

        Ok(())
    }

    /// Project this account into its read view
    pub fn view(&self) -> AccountView {
        AccountView {
            id: self.id.to_string(),
            name: self.name.clone(),
            account_type: self.account_type.as_str().to_string(),
            branch: self.branch.clone(),
            current_balance: self.current_balance,
        }
    }
}

impl Record for Account {
    type Id = AccountId;
    const ENTITY: &'static str = "Account";

    fn id(&self) -> AccountId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.account_type)
    }
}

/// Validation errors for accounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountValidationError {
    EmptyName,
    NameTooLong(usize),
    EmptyBranch,
}

impl fmt::Display for AccountValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Account name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Account name too long ({} chars, max 100)", len)
            }
            Self::EmptyBranch => write!(f, "Account branch cannot be empty"),
        }
    }
}

impl std::error::Error for AccountValidationError {}

/// Incoming payload for creating or updating an account
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub account_type: String,
    pub branch: String,
    pub initial_balance: Option<Money>,
}

/// Read view of an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountView {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub account_type: String,
    pub branch: String,
    pub current_balance: Money,
}
