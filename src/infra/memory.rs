//! In-memory persistence adapters.
//!
//! Backing store for tests and local experiments. `MemoryUnitOfWork`
//! stages writes against a snapshot and merges them into the live map
//! on commit, so the commit/rollback contract can be observed without
//! a database and writers outside the transaction are never clobbered.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::domain::{TransactionContext, TxFuture, UnitOfWork, User, UserRepository};
use crate::errors::{AppError, AppResult};

/// In-memory user repository keyed by stringified id.
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<String, User>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn snapshot(&self) -> AppResult<HashMap<String, User>> {
        let users = self
            .users
            .read()
            .map_err(|_| AppError::internal("user store lock poisoned"))?;
        Ok(users.clone())
    }

    /// Publish entries created inside a transaction.
    ///
    /// Only entries absent from `base` (the snapshot the transaction
    /// started from) are written, so direct writes that landed while
    /// the transaction was open are preserved. A uniqueness clash with
    /// such a write surfaces as a failed commit.
    fn merge_staged(
        &self,
        base: &HashMap<String, User>,
        staged: HashMap<String, User>,
    ) -> AppResult<()> {
        let mut users = self
            .users
            .write()
            .map_err(|_| AppError::internal("user store lock poisoned"))?;
        for (key, user) in staged {
            if !base.contains_key(&key) {
                insert_unique(&mut users, user)?;
            }
        }
        Ok(())
    }
}

fn insert_unique(users: &mut HashMap<String, User>, user: User) -> AppResult<()> {
    let key = user.id.to_string();
    let duplicate =
        users.contains_key(&key) || users.values().any(|existing| existing.email == user.email);
    if duplicate {
        return Err(AppError::conflict("User"));
    }
    users.insert(key, user);
    Ok(())
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn create_user(&self, user: User) -> AppResult<()> {
        let mut users = self
            .users
            .write()
            .map_err(|_| AppError::internal("user store lock poisoned"))?;
        insert_unique(&mut users, user)
    }

    async fn get_user(&self, id: &str) -> AppResult<User> {
        let users = self
            .users
            .read()
            .map_err(|_| AppError::internal("user store lock poisoned"))?;
        users.get(id).cloned().ok_or(AppError::NotFound)
    }
}

/// Staged repository view backing a [`MemoryUnitOfWork`] transaction.
struct StagedStore {
    users: RwLock<HashMap<String, User>>,
}

#[async_trait]
impl UserRepository for StagedStore {
    async fn create_user(&self, user: User) -> AppResult<()> {
        let mut users = self
            .users
            .write()
            .map_err(|_| AppError::internal("user store lock poisoned"))?;
        insert_unique(&mut users, user)
    }

    async fn get_user(&self, id: &str) -> AppResult<User> {
        let users = self
            .users
            .read()
            .map_err(|_| AppError::internal("user store lock poisoned"))?;
        users.get(id).cloned().ok_or(AppError::NotFound)
    }
}

/// Unit of work over a [`MemoryStore`], with commit/rollback counters.
pub struct MemoryUnitOfWork {
    store: Arc<MemoryStore>,
    commits: AtomicUsize,
    rollbacks: AtomicUsize,
}

impl MemoryUnitOfWork {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self {
            store,
            commits: AtomicUsize::new(0),
            rollbacks: AtomicUsize::new(0),
        }
    }

    pub fn commit_count(&self) -> usize {
        self.commits.load(Ordering::SeqCst)
    }

    pub fn rollback_count(&self) -> usize {
        self.rollbacks.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UnitOfWork for MemoryUnitOfWork {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.store.clone()
    }

    async fn run_in_transaction<F, T>(&self, work: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send,
    {
        let base = self.store.snapshot()?;
        let staged = StagedStore {
            users: RwLock::new(base.clone()),
        };

        match work(TransactionContext::new(&staged)).await {
            Ok(result) => {
                let users = staged
                    .users
                    .into_inner()
                    .map_err(|_| AppError::internal("user store lock poisoned"))?;
                self.store.merge_staged(&base, users)?;
                self.commits.fetch_add(1, Ordering::SeqCst);
                Ok(result)
            }
            Err(e) => {
                // Staged writes are discarded with the snapshot.
                self.rollbacks.fetch_add(1, Ordering::SeqCst);
                Err(e)
            }
        }
    }
}
