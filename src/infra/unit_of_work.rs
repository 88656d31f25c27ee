//! SeaORM-backed unit of work.
//!
//! Coordinates repository operations inside a database transaction:
//! the closure's repositories all share one `DatabaseTransaction`, and
//! the transaction commits or rolls back as a whole.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use std::sync::Arc;

use super::repositories::{find_user, insert_user, UserStore};
use crate::domain::{TransactionContext, TxFuture, UnitOfWork, User, UserRepository};
use crate::errors::{AppError, AppResult};

/// Concrete implementation of [`UnitOfWork`] over a connection pool.
pub struct Persistence {
    db: DatabaseConnection,
    users: Arc<UserStore>,
}

impl Persistence {
    pub fn new(db: DatabaseConnection) -> Self {
        let users = Arc::new(UserStore::new(db.clone()));
        Self { db, users }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    async fn run_in_transaction<F, T>(&self, work: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send,
    {
        let txn = self.db.begin().await.map_err(AppError::from)?;
        let users = TxUserStore { txn: &txn };

        // A dropped uncommitted transaction rolls back, so a panic
        // inside `work` cannot leave partial writes behind.
        match work(TransactionContext::new(&users)).await {
            Ok(result) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

/// Transaction-scoped user repository.
///
/// Borrows the transaction so the handle cannot outlive it.
struct TxUserStore<'t> {
    txn: &'t DatabaseTransaction,
}

#[async_trait]
impl UserRepository for TxUserStore<'_> {
    async fn create_user(&self, user: User) -> AppResult<()> {
        insert_user(self.txn, user).await
    }

    async fn get_user(&self, id: &str) -> AppResult<User> {
        find_user(self.txn, id).await
    }
}
