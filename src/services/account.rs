//! Account service
//!
//! Enforces the account lifecycle: creation with a unique name and an
//! initial balance, detail updates, active/inactive toggling and lookup.

use serde_json::json;
use tracing::{info, warn};

use crate::error::{NestEggError, NestEggResult};
use crate::lookup::resolve;
use crate::models::{Account, AccountRequest, AccountType, Money};
use crate::response::ApiResponse;
use crate::storage::RecordStore;
use crate::validation::is_blank;

const BLANK_FIELDS_MESSAGE: &str = "Account name and branch must not be null or blank";

/// Service for account management
pub struct AccountService<'a, S: ?Sized> {
    store: &'a S,
}

fn parse_account_type(value: &str) -> NestEggResult<AccountType> {
    AccountType::parse(value).ok_or_else(|| {
        NestEggError::Validation(format!(
            "Invalid account type: '{}'. Valid types: CHECKING, SAVINGS, CREDIT, CASH, INVESTMENT, LINE_OF_CREDIT, OTHER",
            value
        ))
    })
}

impl<'a, S> AccountService<'a, S>
where
    S: RecordStore<Account> + ?Sized,
{
    /// Create a new account service
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Create a new account.
    ///
    /// The response deliberately carries no payload.
    pub fn create(&self, request: AccountRequest) -> NestEggResult<ApiResponse> {
        info!(name = %request.name, "Creating new account");

        if is_blank(&request.name) || is_blank(&request.branch) {
            warn!("Account creation failed: name or branch is blank");
            return Err(NestEggError::Validation(BLANK_FIELDS_MESSAGE.into()));
        }

        let account_type = parse_account_type(&request.account_type)?;
        let name = request.name.as_str();

        if self.store.exists_by_name(name, None)? {
            warn!(name, "Account creation failed: name already exists");
            return Err(NestEggError::Duplicate {
                entity_type: "Account",
                name: name.to_string(),
            });
        }

        let initial_balance = request.initial_balance.unwrap_or_else(Money::zero);
        let account = Account::new(name, account_type, request.branch.as_str(), initial_balance);
        account
            .validate()
            .map_err(|e| NestEggError::Validation(e.to_string()))?;

        let id = account.id;
        self.store.save_unique(account)?;
        info!(name, %id, "Created new account");

        Ok(ApiResponse::created("Account created successfully"))
    }

    /// Overwrite name, type and branch of an existing account
    pub fn update(&self, id: &str, request: AccountRequest) -> NestEggResult<ApiResponse> {
        info!(id, "Updating account");
        let mut account: Account = resolve(self.store, id)?;

        if is_blank(&request.name) || is_blank(&request.branch) {
            warn!(id, "Account update failed: name or branch is blank");
            return Err(NestEggError::Validation(BLANK_FIELDS_MESSAGE.into()));
        }

        let account_type = parse_account_type(&request.account_type)?;
        let name = request.name.as_str();

        if self.store.exists_by_name(name, Some(account.id))? {
            warn!(id, name, "Account update failed: name belongs to another account");
            return Err(NestEggError::Duplicate {
                entity_type: "Account",
                name: name.to_string(),
            });
        }

        account.apply_details(name, account_type, request.branch.as_str());
        account
            .validate()
            .map_err(|e| NestEggError::Validation(e.to_string()))?;

        self.store.save_unique(account)?;
        info!(id, "Account updated");

        Ok(ApiResponse::ok("Account updated successfully"))
    }

    /// Flip the active flag of an account
    pub fn toggle_status(&self, id: &str) -> NestEggResult<ApiResponse> {
        let mut account: Account = resolve(self.store, id)?;

        let active = account.toggle_active();
        let account_id = account.id.to_string();
        self.store.save(account)?;
        info!(id, active, "Account status updated");

        ApiResponse::ok_with(
            "Account status updated successfully",
            &json!({ "id": account_id, "isActive": active }),
        )
    }

    /// Get the read view of an account
    pub fn get(&self, id: &str) -> NestEggResult<ApiResponse> {
        let account: Account = resolve(self.store, id)?;
        ApiResponse::ok_with("Account existed", &account.view())
    }

    /// Account deletion is part of the contract but not offered yet.
    /// The identifier must still resolve.
    pub fn delete(&self, id: &str) -> NestEggResult<ApiResponse> {
        let _account: Account = resolve(self.store, id)?;
        warn!(id, "Account deletion requested but not supported");
        Ok(ApiResponse::not_implemented(
            "Account deletion is not supported yet",
        ))
    }
}
