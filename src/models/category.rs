//! Category model
//!
//! Categories group spending under a unique name. A category can be switched
//! between active and inactive any number of times until it is soft-deleted;
//! after that its status is frozen.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use super::Record;

/// Maximum length of a category name
pub const MAX_NAME_LEN: usize = 50;

/// Maximum length of a category description
pub const MAX_DESCRIPTION_LEN: usize = 100;

/// Lifecycle state of a category
///
/// ```text
/// Active <--toggle--> Inactive
///    \                  /
///     +--> Deleted <---+      (terminal)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum CategoryStatus {
    Active,
    Inactive,
    /// Soft-deleted; remembers whether it was active at the time
    Deleted { was_active: bool },
}

impl CategoryStatus {
    pub fn is_active(&self) -> bool {
        match self {
            Self::Active => true,
            Self::Inactive => false,
            Self::Deleted { was_active } => *was_active,
        }
    }

    pub fn is_deleted(&self) -> bool {
        matches!(self, Self::Deleted { .. })
    }
}

impl Default for CategoryStatus {
    fn default() -> Self {
        Self::Active
    }
}

/// A spending category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Category name, unique across all categories
    pub name: String,

    /// Free-form description
    pub description: String,

    /// Lifecycle state
    #[serde(default)]
    pub status: CategoryStatus,

    /// When the category was created
    pub created_at: DateTime<Utc>,

    /// When the category was last modified
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// Create a new active category
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: CategoryId::new(),
            name: name.into(),
            description: description.into(),
            status: CategoryStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    pub fn is_deleted(&self) -> bool {
        self.status.is_deleted()
    }

    /// Overwrite name and description
    pub fn rename(&mut self, name: impl Into<String>, description: impl Into<String>) {
        self.name = name.into();
        self.description = description.into();
        self.updated_at = Utc::now();
    }

    /// Switch between active and inactive, returning the new active flag
    pub fn toggle_active(&mut self) -> Result<bool, CategoryStateError> {
        self.status = match self.status {
            CategoryStatus::Active => CategoryStatus::Inactive,
            CategoryStatus::Inactive => CategoryStatus::Active,
            CategoryStatus::Deleted { .. } => return Err(CategoryStateError::Deleted),
        };
        self.updated_at = Utc::now();
        Ok(self.status.is_active())
    }

    /// Soft-delete this category. The active flag is kept as it was.
    pub fn mark_deleted(&mut self) -> Result<(), CategoryStateError> {
        self.status = match self.status {
            CategoryStatus::Active => CategoryStatus::Deleted { was_active: true },
            CategoryStatus::Inactive => CategoryStatus::Deleted { was_active: false },
            CategoryStatus::Deleted { .. } => return Err(CategoryStateError::AlreadyDeleted),
        };
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        let name_len = self.name.chars().count();
        if name_len > MAX_NAME_LEN {
            return Err(CategoryValidationError::NameTooLong(name_len));
        }

        let description_len = self.description.chars().count();
        if description_len > MAX_DESCRIPTION_LEN {
            return Err(CategoryValidationError::DescriptionTooLong(description_len));
        }

        Ok(())
    }

    /// Project this category into its read view
    pub fn view(&self) -> CategoryView {
        CategoryView {
            id: self.id.to_string(),
            name: self.name.clone(),
            description: self.description.clone(),
            is_active: self.is_active(),
            is_deleted: self.is_deleted(),
        }
    }
}

impl Record for Category {
    type Id = CategoryId;
    const ENTITY: &'static str = "Category";

    fn id(&self) -> CategoryId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
    DescriptionTooLong(usize),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max {})", len, MAX_NAME_LEN)
            }
            Self::DescriptionTooLong(len) => write!(
                f,
                "Category description too long ({} chars, max {})",
                len, MAX_DESCRIPTION_LEN
            ),
        }
    }
}

impl std::error::Error for CategoryValidationError {}

/// Forbidden status transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryStateError {
    Deleted,
    AlreadyDeleted,
}

impl fmt::Display for CategoryStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deleted => write!(f, "Cannot update status of a deleted category"),
            Self::AlreadyDeleted => write!(f, "Category is already deleted"),
        }
    }
}

impl std::error::Error for CategoryStateError {}

/// Incoming payload for creating or updating a category
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryRequest {
    pub name: String,
    pub description: String,
}

/// Read view of a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub is_deleted: bool,
}
