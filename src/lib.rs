//! User API - A layered user management service
//!
//! This crate provides a clean architecture foundation for a user
//! REST API with Axum and SeaORM.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Value objects, entities, requests/responses and ports
//! - **validation**: Structured validation engine
//! - **services**: Application use cases
//! - **infra**: Infrastructure concerns (database, persistence adapters)
//! - **api**: HTTP handlers, transport context and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod validation;

pub use api::AppState;
pub use config::Config;
pub use domain::{Email, Password, User};
pub use errors::{AppError, AppResult};
