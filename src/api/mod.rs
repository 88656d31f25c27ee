//! API layer - HTTP handlers and transport adapters
//!
//! This module contains all HTTP-related concerns:
//! - The transport-agnostic request context and user controller
//! - Request handlers
//! - Route definitions

pub mod context;
pub mod controllers;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

pub use context::{Context, ContextExt};
pub use controllers::UserController;
pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::AppState;
