//! Category service
//!
//! Categories move between active and inactive until they are soft-deleted,
//! after which their status is frozen.

use serde_json::json;
use tracing::{info, warn};

use crate::error::{NestEggError, NestEggResult};
use crate::lookup::resolve;
use crate::models::{Category, CategoryRequest};
use crate::response::ApiResponse;
use crate::storage::RecordStore;
use crate::validation::is_blank;

/// Reported for blank fields and for name collisions alike
pub const INVALID_CATEGORY_MESSAGE: &str = "Category name and description must not be null or blank, and category with the same name must not exist";

fn invalid_category() -> NestEggError {
    NestEggError::Validation(INVALID_CATEGORY_MESSAGE.into())
}

/// Service for category management
pub struct CategoryService<'a, S: ?Sized> {
    store: &'a S,
}

impl<'a, S> CategoryService<'a, S>
where
    S: RecordStore<Category> + ?Sized,
{
    /// Create a new category service
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    fn save_named(&self, category: Category) -> NestEggResult<()> {
        category
            .validate()
            .map_err(|e| NestEggError::Validation(e.to_string()))?;

        self.store.save_unique(category).map_err(|err| match err {
            NestEggError::Duplicate { .. } => invalid_category(),
            other => other,
        })
    }

    /// Create a new active category
    pub fn create(&self, request: CategoryRequest) -> NestEggResult<ApiResponse> {
        info!(name = %request.name, "Creating new category");

        if is_blank(&request.name)
            || is_blank(&request.description)
            || self.store.exists_by_name(request.name.as_str(), None)?
        {
            warn!(name = %request.name, "Category creation rejected");
            return Err(invalid_category());
        }

        let category = Category::new(request.name.as_str(), request.description.as_str());
        let id = category.id;
        self.save_named(category)?;
        info!(%id, "Created new category");

        ApiResponse::created_with(
            "Category created successfully",
            &json!({ "id": id.to_string() }),
        )
    }

    /// Overwrite name and description of a category
    pub fn update(&self, id: &str, request: CategoryRequest) -> NestEggResult<ApiResponse> {
        info!(id, "Updating category");

        if is_blank(&request.name) || is_blank(&request.description) {
            warn!(id, "Category update rejected: blank field");
            return Err(invalid_category());
        }

        let mut category: Category = resolve(self.store, id)?;

        if self
            .store
            .exists_by_name(request.name.as_str(), Some(category.id))?
        {
            warn!(id, name = %request.name, "Category update rejected: name taken");
            return Err(invalid_category());
        }

        category.rename(request.name.as_str(), request.description.as_str());
        let category_id = category.id.to_string();
        self.save_named(category)?;
        info!(id, "Category updated");

        ApiResponse::ok_with(
            "Category updated successfully",
            &json!({ "id": category_id }),
        )
    }

    /// Flip between active and inactive. Deleted categories are refused.
    pub fn toggle_active(&self, id: &str) -> NestEggResult<ApiResponse> {
        let mut category: Category = resolve(self.store, id)?;

        let active = category.toggle_active().map_err(|e| {
            warn!(id, "Status change refused for deleted category");
            NestEggError::Validation(e.to_string())
        })?;

        let category_id = category.id.to_string();
        self.store.save(category)?;
        info!(id, active, "Category status updated");

        ApiResponse::ok_with(
            "Category status updated successfully",
            &json!({ "id": category_id, "isActive": active }),
        )
    }

    /// Mark a category deleted. The record stays in the store.
    pub fn soft_delete(&self, id: &str) -> NestEggResult<ApiResponse> {
        let mut category: Category = resolve(self.store, id)?;

        category
            .mark_deleted()
            .map_err(|e| NestEggError::Validation(e.to_string()))?;

        self.store.save(category)?;
        info!(id, "Category deleted");

        Ok(ApiResponse::accepted("Category deleted successfully"))
    }

    /// Get the read view of a category, deleted or not
    pub fn get(&self, id: &str) -> NestEggResult<ApiResponse> {
        let category: Category = resolve(self.store, id)?;
        ApiResponse::ok_with("Category retrieved successfully", &category.view())
    }

    /// List every category.
    ///
    /// Not offered until callers can be authenticated; always answers 501.
    pub fn get_all(&self) -> NestEggResult<ApiResponse> {
        warn!("Category listing requested but not supported");
        Ok(ApiResponse::not_implemented(
            "Listing categories is not supported yet",
        ))
    }
}
