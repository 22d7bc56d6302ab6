use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;

use crate::config::StorageConfig;
use crate::errors::StoreResult;
use crate::models::{Task, User};

/// Result of a create-user attempt.
#[derive(Debug, PartialEq, Eq)]
pub enum CreateUserOutcome {
    Created,
    AlreadyExists,
}

/// File-backed table storage for the user and task tables.
///
/// Each table is a CSV file with a header row. Every operation re-reads the
/// full table from disk and mutations rewrite it in full; the files are the
/// sole source of truth between requests. A per-table mutex serializes the
/// read-modify-write cycle so concurrent appends cannot drop each other's
/// rows.
pub struct CsvStore {
    users_path: PathBuf,
    tasks_path: PathBuf,
    users_lock: Arc<Mutex<()>>,
    tasks_lock: Arc<Mutex<()>>,
}

impl CsvStore {
    pub fn new(config: &StorageConfig) -> Self {
        let dir = PathBuf::from(&config.data_dir);
        Self {
            users_path: dir.join("users.csv"),
            tasks_path: dir.join("tasks.csv"),
            users_lock: Arc::new(Mutex::new(())),
            tasks_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Create missing table files with their header row. Existing files are
    /// left untouched, stale schemas included; there is no migration.
    pub fn init(&self) -> StoreResult<()> {
        if let Some(dir) = self.users_path.parent() {
            fs::create_dir_all(dir)?;
        }
        write_header_if_missing(&self.users_path, &User::HEADERS)?;
        write_header_if_missing(&self.tasks_path, &Task::HEADERS)?;
        Ok(())
    }

    pub async fn load_users(&self) -> StoreResult<Vec<User>> {
        let _guard = self.users_lock.lock().await;
        read_table(&self.users_path)
    }

    /// Append a user unless the username is already taken. Check and rewrite
    /// happen under the users lock.
    pub async fn create_user(&self, user: User) -> StoreResult<CreateUserOutcome> {
        let _guard = self.users_lock.lock().await;

        let mut users: Vec<User> = read_table(&self.users_path)?;
        if users.iter().any(|u| u.username == user.username) {
            tracing::debug!("Username already taken: {}", user.username);
            return Ok(CreateUserOutcome::AlreadyExists);
        }

        users.push(user);
        write_table(&self.users_path, &User::HEADERS, &users)?;
        Ok(CreateUserOutcome::Created)
    }

    /// Unconditional append; no duplicate checking, no owner validation.
    pub async fn append_task(&self, task: Task) -> StoreResult<()> {
        let _guard = self.tasks_lock.lock().await;

        let mut tasks: Vec<Task> = read_table(&self.tasks_path)?;
        tasks.push(task);
        write_table(&self.tasks_path, &Task::HEADERS, &tasks)
    }

    /// All tasks whose `user` field equals `name` exactly, in table order.
    pub async fn tasks_for_user(&self, name: &str) -> StoreResult<Vec<Task>> {
        let _guard = self.tasks_lock.lock().await;

        let tasks: Vec<Task> = read_table(&self.tasks_path)?;
        Ok(tasks.into_iter().filter(|t| t.user == name).collect())
    }
}

impl Clone for CsvStore {
    fn clone(&self) -> Self {
        Self {
            users_path: self.users_path.clone(),
            tasks_path: self.tasks_path.clone(),
            users_lock: self.users_lock.clone(),
            tasks_lock: self.tasks_lock.clone(),
        }
    }
}

fn write_header_if_missing(path: &Path, headers: &[&str]) -> StoreResult<()> {
    if path.exists() {
        return Ok(());
    }
    tracing::info!("Creating table file {}", path.display());
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
    wtr.write_record(headers)?;
    wtr.flush()?;
    Ok(())
}

fn read_table<T: DeserializeOwned>(path: &Path) -> StoreResult<Vec<T>> {
    let mut rdr = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for record in rdr.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}

fn write_table<T: Serialize>(path: &Path, headers: &[&str], rows: &[T]) -> StoreResult<()> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
    wtr.write_record(headers)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn test_store() -> (TempDir, CsvStore) {
        let dir = TempDir::new().unwrap();
        let store = CsvStore::new(&StorageConfig {
            data_dir: dir.path().to_str().unwrap().to_string(),
        });
        store.init().unwrap();
        (dir, store)
    }

    fn user(name: &str, password: &str) -> User {
        User {
            username: name.to_string(),
            password: password.to_string(),
        }
    }

    fn task(desc: &str, deadline: &str, owner: &str) -> Task {
        Task {
            task: desc.to_string(),
            deadline: deadline.to_string(),
            user: owner.to_string(),
        }
    }

    #[test]
    fn test_init_writes_header_rows() {
        let (dir, _store) = test_store();

        let users = fs::read_to_string(dir.path().join("users.csv")).unwrap();
        let tasks = fs::read_to_string(dir.path().join("tasks.csv")).unwrap();
        assert_eq!(users.trim_end(), "username,password");
        assert_eq!(tasks.trim_end(), "task,deadline,user");
    }

    #[tokio::test]
    async fn test_init_never_truncates_existing_tables() {
        let (dir, store) = test_store();
        store.create_user(user("alice", "secret")).await.unwrap();
        store
            .append_task(task("Buy milk", "2024-01-01", "alice"))
            .await
            .unwrap();

        // Simulate a restart against the same data directory.
        let reopened = CsvStore::new(&StorageConfig {
            data_dir: dir.path().to_str().unwrap().to_string(),
        });
        reopened.init().unwrap();

        let users = reopened.load_users().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].username, "alice");
        assert_eq!(users[0].password, "secret");

        let tasks = reopened.tasks_for_user("alice").await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].task, "Buy milk");
        assert_eq!(tasks[0].deadline, "2024-01-01");
    }

    #[tokio::test]
    async fn test_duplicate_username_is_rejected_once() {
        let (_dir, store) = test_store();

        let first = store.create_user(user("alice", "one")).await.unwrap();
        let second = store.create_user(user("alice", "two")).await.unwrap();

        assert_eq!(first, CreateUserOutcome::Created);
        assert_eq!(second, CreateUserOutcome::AlreadyExists);

        // Row count grew by exactly one across the two calls.
        let users = store.load_users().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].password, "one");
    }

    #[tokio::test]
    async fn test_tasks_filter_is_exact_and_ordered() {
        let (_dir, store) = test_store();
        store
            .append_task(task("Buy milk", "2024-01-01", "alice"))
            .await
            .unwrap();
        store
            .append_task(task("Walk dog", "2024-01-02", "Alice"))
            .await
            .unwrap();
        store
            .append_task(task("Pay rent", "2024-02-01", "alice"))
            .await
            .unwrap();

        let tasks = store.tasks_for_user("alice").await.unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].task, "Buy milk");
        assert_eq!(tasks[1].task, "Pay rent");

        // Case-sensitive match, no trimming.
        assert_eq!(store.tasks_for_user("ALICE").await.unwrap().len(), 0);
        assert_eq!(store.tasks_for_user("alice ").await.unwrap().len(), 0);
        assert!(store.tasks_for_user("bob").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fields_with_commas_survive_rewrite() {
        let (_dir, store) = test_store();
        store
            .append_task(task("Buy milk, eggs, and bread", "someday", "alice"))
            .await
            .unwrap();
        store
            .append_task(task("Second task", "later", "alice"))
            .await
            .unwrap();

        let tasks = store.tasks_for_user("alice").await.unwrap();
        assert_eq!(tasks[0].task, "Buy milk, eggs, and bread");
        assert_eq!(tasks.len(), 2);
    }

    #[tokio::test]
    async fn test_empty_string_values_are_accepted() {
        let (_dir, store) = test_store();
        let outcome = store.create_user(user("", "")).await.unwrap();
        assert_eq!(outcome, CreateUserOutcome::Created);

        let users = store.load_users().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].username, "");
    }
}
