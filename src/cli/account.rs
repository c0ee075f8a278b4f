//! Account CLI commands

use clap::Subcommand;

use crate::models::{AccountRequest, Money};
use crate::response::ApiResponse;
use crate::services::AccountService;
use crate::storage::Storage;

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Create a new account
    Create {
        /// Account name
        name: String,
        /// Account type (checking, savings, credit, cash, investment, line_of_credit, other)
        #[arg(short = 't', long = "type", default_value = "checking")]
        account_type: String,
        /// Bank branch holding the account
        #[arg(short, long)]
        branch: String,
        /// Opening balance in minor units (e.g. 150000 for 1500.00)
        #[arg(long, allow_negative_numbers = true)]
        balance: Option<Money>,
    },
    /// Update name, type and branch of an account
    Update {
        /// Account ID
        id: String,
        /// New name
        #[arg(short, long)]
        name: String,
        /// New account type
        #[arg(short = 't', long = "type")]
        account_type: String,
        /// New branch
        #[arg(short, long)]
        branch: String,
    },
    /// Switch an account between active and inactive
    Toggle {
        /// Account ID
        id: String,
    },
    /// Show account details
    Show {
        /// Account ID
        id: String,
    },
    /// Delete an account
    Delete {
        /// Account ID
        id: String,
    },
}

/// Handle an account command
pub fn handle_account_command(storage: &Storage, cmd: AccountCommands) -> ApiResponse {
    let service = AccountService::new(&storage.accounts);

    let result = match cmd {
        AccountCommands::Create {
            name,
            account_type,
            branch,
            balance,
        } => service.create(AccountRequest {
            name,
            account_type,
            branch,
            initial_balance: balance,
        }),
        AccountCommands::Update {
            id,
            name,
            account_type,
            branch,
        } => service.update(
            &id,
            AccountRequest {
                name,
                account_type,
                branch,
                initial_balance: None,
            },
        ),
        AccountCommands::Toggle { id } => service.toggle_status(&id),
        AccountCommands::Show { id } => service.get(&id),
        AccountCommands::Delete { id } => service.delete(&id),
    };

    ApiResponse::from_result(result)
}
