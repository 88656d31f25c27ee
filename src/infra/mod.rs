//! Infrastructure layer: database access and persistence adapters.

pub mod db;
pub mod memory;
pub mod repositories;
mod unit_of_work;

pub use db::{Database, Migrator};
pub use memory::{MemoryStore, MemoryUnitOfWork};
pub use repositories::UserStore;
pub use unit_of_work::Persistence;
