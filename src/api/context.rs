//! Transport-agnostic request context.
//!
//! Controllers talk to the transport through this small capability
//! set instead of framework types, so the same controller logic runs
//! against HTTP, tests or any other carrier that can supply JSON
//! bodies and query parameters.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::errors::{AppError, AppResult};

/// Minimal request/response surface a transport must provide.
pub trait Context: Send {
    /// Deserialize the request body into raw JSON.
    fn bind_raw(&self) -> AppResult<Value>;

    /// Read a query parameter, falling back to `default` when absent.
    fn query(&self, key: &str, default: &str) -> String;

    /// Write a JSON payload as the response.
    fn json(&mut self, payload: Value) -> AppResult<()>;
}

/// Typed conveniences layered over [`Context`].
pub trait ContextExt: Context {
    /// Deserialize the request body into a typed value.
    fn bind<T: DeserializeOwned>(&self) -> AppResult<T> {
        let raw = self.bind_raw()?;
        serde_json::from_value(raw).map_err(|e| AppError::bad_request(e.to_string()))
    }

    /// Serialize a typed payload as the response.
    fn respond<T: Serialize>(&mut self, payload: &T) -> AppResult<()> {
        let value =
            serde_json::to_value(payload).map_err(|e| AppError::internal(e.to_string()))?;
        self.json(value)
    }
}

impl<C: Context + ?Sized> ContextExt for C {}
