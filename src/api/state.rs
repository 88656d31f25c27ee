//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::domain::UnitOfWork;
use crate::infra::{Database, Persistence};
use crate::services::{UserManager, UserService};

/// Application state wiring services to the router.
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Database connection, absent when services are injected directly
    database: Option<Arc<Database>>,
}

impl AppState {
    /// Create application state from a database connection.
    ///
    /// Wires the SeaORM persistence adapter into the default service
    /// implementation.
    pub fn from_database(database: Arc<Database>) -> Self {
        let persistence = Persistence::new(database.get_connection());
        let user_service = Arc::new(UserManager::new(persistence.users()));

        Self {
            user_service,
            database: Some(database),
        }
    }

    /// Create application state with a manually injected service.
    pub fn with_service(user_service: Arc<dyn UserService>) -> Self {
        Self {
            user_service,
            database: None,
        }
    }

    /// Database handle, when the state was built from one.
    pub fn database(&self) -> Option<&Arc<Database>> {
        self.database.as_ref()
    }
}
