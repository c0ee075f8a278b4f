//! Storage layer for NestEgg
//!
//! Provides JSON file storage with atomic writes behind the [`RecordStore`]
//! trait, which is all the lifecycle services depend on.

pub mod file_io;
pub mod repository;

pub use file_io::{load_records, store_records};
pub use repository::Repository;

use crate::config::paths::NestEggPaths;
use crate::error::NestEggError;
use crate::models::{Account, Category, Record};

/// Account persistence
pub type AccountRepository = Repository<Account>;

/// Category persistence
pub type CategoryRepository = Repository<Category>;

/// Durable keyed store for one kind of record
///
/// `exists_by_name` followed by `save` is two separate calls and can race.
/// `save_unique` performs the name check and the write as one step.
pub trait RecordStore<R: Record> {
    /// Get a record by ID
    fn find(&self, id: R::Id) -> Result<Option<R>, NestEggError>;

    /// Check if a name is taken, optionally ignoring one record
    fn exists_by_name(&self, name: &str, exclude_id: Option<R::Id>) -> Result<bool, NestEggError>;

    /// Insert or replace a record
    fn save(&self, record: R) -> Result<(), NestEggError>;

    /// Insert or replace a record unless another record already owns its name
    fn save_unique(&self, record: R) -> Result<(), NestEggError>;
}

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    pub accounts: AccountRepository,
    pub categories: CategoryRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: NestEggPaths) -> Result<Self, NestEggError> {
        paths.ensure_directories()?;

        Ok(Self {
            accounts: AccountRepository::new(paths.accounts_file()),
            categories: CategoryRepository::new(paths.categories_file()),
        })
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), NestEggError> {
        self.accounts.load()?;
        self.categories.load()?;
        Ok(())
    }
}
