//! Category CLI commands

use clap::Subcommand;

use crate::models::CategoryRequest;
use crate::response::ApiResponse;
use crate::services::CategoryService;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// Create a new category
    Create {
        /// Category name
        name: String,
        /// What the category is for
        #[arg(short, long)]
        description: String,
    },
    /// Update name and description of a category
    Update {
        /// Category ID
        id: String,
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        description: String,
    },
    /// Switch a category between active and inactive
    Toggle {
        /// Category ID
        id: String,
    },
    /// Show category details
    Show {
        /// Category ID
        id: String,
    },
    /// Soft-delete a category
    Delete {
        /// Category ID
        id: String,
    },
    /// List all categories
    List,
}

/// Handle a category command
pub fn handle_category_command(storage: &Storage, cmd: CategoryCommands) -> ApiResponse {
    let service = CategoryService::new(&storage.categories);

    let result = match cmd {
        CategoryCommands::Create { name, description } => {
            service.create(CategoryRequest { name, description })
        }
        CategoryCommands::Update {
            id,
            name,
            description,
        } => service.update(&id, CategoryRequest { name, description }),
        CategoryCommands::Toggle { id } => service.toggle_active(&id),
        CategoryCommands::Show { id } => service.get(&id),
        CategoryCommands::Delete { id } => service.soft_delete(&id),
        CategoryCommands::List => service.get_all(),
    };

    ApiResponse::from_result(result)
}
