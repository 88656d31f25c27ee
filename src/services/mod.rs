//! Application services orchestrating domain operations.

mod user_service;

pub use user_service::{UserManager, UserService};
