//! Persistence ports for the user aggregate.
//!
//! The orchestration layer depends on these traits only; concrete
//! adapters live under `crate::infra`. Repositories operate on the
//! entity and raw identifiers, never on request or response types,
//! which keeps persistence ignorant of the transport.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use async_trait::async_trait;

use super::User;
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository port.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Durably store a new user keyed by its id.
    ///
    /// Fails with `AppError::Conflict` on a duplicate unique key and
    /// `AppError::Database` on store-level failure.
    async fn create_user(&self, user: User) -> AppResult<()>;

    /// Fetch a user by identifier.
    ///
    /// Fails with `AppError::NotFound` when no such user exists,
    /// never returning a zero-valued user instead.
    async fn get_user(&self, id: &str) -> AppResult<User>;
}

/// Repository view scoped to an active transaction.
///
/// The borrow ties the view to the transaction lifetime: the handle
/// cannot escape the enclosing `run_in_transaction` call or be reused
/// after it completes.
pub struct TransactionContext<'a> {
    users: &'a dyn UserRepository,
}

impl<'a> TransactionContext<'a> {
    pub fn new(users: &'a dyn UserRepository) -> Self {
        Self { users }
    }

    /// User repository bound to the active transaction.
    pub fn users(&self) -> &'a dyn UserRepository {
        self.users
    }
}

/// Boxed future returned by unit-of-work closures.
pub type TxFuture<'a, T> = Pin<Box<dyn Future<Output = AppResult<T>> + Send + 'a>>;

/// Transactional unit-of-work port.
///
/// Wraps a function of repository operations in an atomic boundary:
/// the work either commits as a whole or rolls back as a whole, and
/// partial application is never visible to other transactions.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Repository handle outside any explicit transaction.
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Run `work` inside a transaction.
    ///
    /// Commits when `work` returns `Ok` (a failing commit is returned
    /// as the error); rolls back and propagates the error otherwise.
    /// Exactly one of the two outcomes occurs per invocation.
    async fn run_in_transaction<F, T>(&self, work: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send;
}

/// Reduce boilerplate when running unit-of-work closures.
#[macro_export]
macro_rules! with_transaction {
    ($uow:expr, |$ctx:ident| $body:expr) => {
        $uow.run_in_transaction(|$ctx| Box::pin(async move { $body }))
            .await
    };
}
