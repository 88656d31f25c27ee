//! User HTTP handlers.
//!
//! Thin axum adapters: each handler wraps the request into an
//! [`HttpContext`] and delegates to the transport-agnostic
//! [`UserController`].

use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::post;
use axum::Router;
use serde_json::Value;

use crate::api::context::Context;
use crate::api::controllers::UserController;
use crate::api::AppState;
use crate::errors::{AppError, AppResult};

/// [`Context`] implementation over an axum request.
pub struct HttpContext {
    body: Bytes,
    query: HashMap<String, String>,
    response: Option<Value>,
}

impl HttpContext {
    fn new(body: Bytes, query: HashMap<String, String>) -> Self {
        Self {
            body,
            query,
            response: None,
        }
    }

    fn into_response(self) -> Value {
        self.response.unwrap_or(Value::Null)
    }
}

impl Context for HttpContext {
    fn bind_raw(&self) -> AppResult<Value> {
        serde_json::from_slice(&self.body).map_err(|e| AppError::bad_request(e.to_string()))
    }

    fn query(&self, key: &str, default: &str) -> String {
        self.query
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    fn json(&mut self, payload: Value) -> AppResult<()> {
        self.response = Some(payload);
        Ok(())
    }
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/", post(create_user).get(get_user))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = crate::domain::UserCreateRequest,
    responses(
        (status = 201, description = "User created successfully", body = crate::domain::GetUserResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "User already exists")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<Value>)> {
    let controller = UserController::new(state.user_service.clone());
    let mut ctx = HttpContext::new(body, HashMap::new());

    controller.create_user(&mut ctx).await?;

    Ok((StatusCode::CREATED, Json(ctx.into_response())))
}

/// Fetch a user by id
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    params(
        ("id" = String, Query, description = "User identifier (UUID v4)")
    ),
    responses(
        (status = 200, description = "User found", body = crate::domain::GetUserResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
) -> AppResult<Json<Value>> {
    let controller = UserController::new(state.user_service.clone());
    let mut ctx = HttpContext::new(Bytes::new(), query);

    controller.get_user(&mut ctx).await?;

    Ok(Json(ctx.into_response()))
}
