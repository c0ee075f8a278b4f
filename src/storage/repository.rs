//! JSON-file backed record repository
//!
//! Records are held in memory behind a `RwLock` and the whole collection is
//! written back to disk after every mutation. All writes to the file happen
//! while the write lock is held, so concurrent saves are serialized.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::NestEggError;
use crate::models::Record;

use super::file_io::{load_records, store_records};
use super::RecordStore;

/// Repository for one kind of record
pub struct Repository<R: Record> {
    path: PathBuf,
    data: RwLock<HashMap<R::Id, R>>,
}

impl<R: Record> Repository<R> {
    /// Create a new, empty repository backed by `path`
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<R::Id, R>>, NestEggError> {
        self.data
            .read()
            .map_err(|e| NestEggError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<R::Id, R>>, NestEggError> {
        self.data
            .write()
            .map_err(|e| NestEggError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load records from disk, replacing whatever is in memory
    pub fn load(&self) -> Result<(), NestEggError> {
        let records: Vec<R> = load_records(&self.path)?;

        let mut data = self.write()?;
        data.clear();
        for record in records {
            data.insert(record.id(), record);
        }

        Ok(())
    }

    /// Write `record` through to disk, then publish it in memory.
    ///
    /// Runs with the write lock held. If the file cannot be written the
    /// in-memory map is left untouched.
    fn commit(&self, data: &mut HashMap<R::Id, R>, record: R) -> Result<(), NestEggError> {
        let mut records: Vec<&R> = data
            .values()
            .filter(|r| r.id() != record.id())
            .chain(std::iter::once(&record))
            .collect();
        records.sort_by(|a, b| a.name().cmp(b.name()));
        store_records(&self.path, &records)?;

        data.insert(record.id(), record);
        Ok(())
    }

    /// Count records
    pub fn count(&self) -> Result<usize, NestEggError> {
        Ok(self.read()?.len())
    }

    /// Get all records, ordered by name
    pub fn get_all(&self) -> Result<Vec<R>, NestEggError> {
        let data = self.read()?;
        let mut records: Vec<R> = data.values().cloned().collect();
        records.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(records)
    }
}

/// Names match only when they are exactly equal
fn name_taken<R: Record>(data: &HashMap<R::Id, R>, name: &str, exclude_id: Option<R::Id>) -> bool {
    data.values()
        .any(|r| r.name() == name && Some(r.id()) != exclude_id)
}

impl<R: Record> RecordStore<R> for Repository<R> {
    fn find(&self, id: R::Id) -> Result<Option<R>, NestEggError> {
        Ok(self.read()?.get(&id).cloned())
    }

    fn exists_by_name(&self, name: &str, exclude_id: Option<R::Id>) -> Result<bool, NestEggError> {
        Ok(name_taken::<R>(&*self.read()?, name, exclude_id))
    }

    fn save(&self, record: R) -> Result<(), NestEggError> {
        let mut data = self.write()?;
        self.commit(&mut data, record)
    }

    fn save_unique(&self, record: R) -> Result<(), NestEggError> {
        let mut data = self.write()?;
        if name_taken::<R>(&data, record.name(), Some(record.id())) {
            return Err(NestEggError::Duplicate {
                entity_type: R::ENTITY,
                name: record.name().to_string(),
            });
        }
        self.commit(&mut data, record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Account, AccountType, Category, Money};
    use std::sync::{Arc, Barrier};
    use std::thread;
    use tempfile::TempDir;

    fn create_test_repo<R: Record>(file: &str) -> (TempDir, Repository<R>) {
        let temp_dir = TempDir::new().unwrap();
        let repo = Repository::new(temp_dir.path().join(file));
        (temp_dir, repo)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo::<Account>("accounts.json");
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_save_and_find() {
        let (_temp_dir, repo) = create_test_repo::<Account>("accounts.json");
        let account = Account::new("Checking", AccountType::Checking, "HCM", Money::zero());
        let id = account.id;

        repo.save(account).unwrap();

        let retrieved = repo.find(id).unwrap().unwrap();
        assert_eq!(retrieved.name, "Checking");
        assert!(repo.find(crate::models::AccountId::new()).unwrap().is_none());
    }

    #[test]
    fn test_save_is_durable() {
        let (temp_dir, repo) = create_test_repo::<Category>("categories.json");
        let category = Category::new("Groceries", "Food");
        let id = category.id;
        repo.save(category).unwrap();

        let reopened: Repository<Category> = Repository::new(temp_dir.path().join("categories.json"));
        reopened.load().unwrap();
        assert_eq!(reopened.find(id).unwrap().unwrap().description, "Food");
    }

    #[test]
    fn test_exists_by_name() {
        let (_temp_dir, repo) = create_test_repo::<Category>("categories.json");
        let category = Category::new("Dining Out", "Restaurants");
        let id = category.id;
        repo.save(category).unwrap();

        assert!(repo.exists_by_name("Dining Out", None).unwrap());
        assert!(!repo.exists_by_name("dining out", None).unwrap());
        assert!(!repo.exists_by_name(" Dining Out", None).unwrap());
        assert!(!repo.exists_by_name("Dining Out", Some(id)).unwrap());
        assert!(!repo.exists_by_name("Other", None).unwrap());
    }

    #[test]
    fn test_save_unique_rejects_other_owner() {
        let (_temp_dir, repo) = create_test_repo::<Account>("accounts.json");
        repo.save_unique(Account::new("Main", AccountType::Checking, "HCM", Money::zero()))
            .unwrap();

        let clash = Account::new("Main", AccountType::Savings, "HN", Money::zero());
        let result = repo.save_unique(clash);
        assert!(matches!(result, Err(NestEggError::Duplicate { entity_type: "Account", .. })));
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_save_unique_allows_resaving_same_record() {
        let (_temp_dir, repo) = create_test_repo::<Category>("categories.json");
        let mut category = Category::new("Rent", "Monthly");
        repo.save_unique(category.clone()).unwrap();

        category.rename("Rent", "Monthly rent");
        repo.save_unique(category).unwrap();
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_failed_write_leaves_memory_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not-a-dir");
        std::fs::write(&blocker, "file").unwrap();
        let repo: Repository<Category> = Repository::new(blocker.join("categories.json"));

        let category = Category::new("Ghost", "Never written");
        let id = category.id;
        assert!(repo.save_unique(category.clone()).is_err());
        assert!(repo.save(category).is_err());

        assert!(repo.find(id).unwrap().is_none());
        assert!(!repo.exists_by_name("Ghost", None).unwrap());
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_failed_update_keeps_previous_version() {
        let (temp_dir, repo) = create_test_repo::<Category>("categories.json");
        let mut category = Category::new("Rent", "Monthly");
        repo.save(category.clone()).unwrap();

        // Replace the data file with a directory so the rename fails.
        let file = temp_dir.path().join("categories.json");
        std::fs::remove_file(&file).unwrap();
        std::fs::create_dir(&file).unwrap();
        std::fs::write(file.join("occupied"), "x").unwrap();

        category.rename("Lease", "Yearly");
        assert!(repo.save_unique(category.clone()).is_err());

        let stored = repo.find(category.id).unwrap().unwrap();
        assert_eq!(stored.name, "Rent");
        assert!(repo.exists_by_name("Rent", None).unwrap());
        assert!(!repo.exists_by_name("Lease", None).unwrap());
    }

    // Check-then-save through two separate calls lets both racers through.
    #[test]
    fn test_unguarded_check_then_save_admits_duplicates() {
        let (_temp_dir, repo) = create_test_repo::<Category>("categories.json");

        let first = Category::new("Travel", "Trips");
        let second = Category::new("Travel", "Flights");

        assert!(!repo.exists_by_name(&first.name, None).unwrap());
        assert!(!repo.exists_by_name(&second.name, None).unwrap());
        repo.save(first).unwrap();
        repo.save(second).unwrap();

        let travel = repo
            .get_all()
            .unwrap()
            .into_iter()
            .filter(|c| c.name == "Travel")
            .count();
        assert_eq!(travel, 2);
    }

    #[test]
    fn test_concurrent_save_unique_admits_one() {
        let (_temp_dir, repo) = create_test_repo::<Category>("categories.json");
        let repo = Arc::new(repo);
        let barrier = Arc::new(Barrier::new(8));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let repo = Arc::clone(&repo);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    repo.save_unique(Category::new("Shared", format!("racer {}", i)))
                        .is_ok()
                })
            })
            .collect();

        let winners = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();
        assert_eq!(winners, 1);
        assert_eq!(repo.count().unwrap(), 1);
    }
}
