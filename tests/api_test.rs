//! Integration tests for API endpoints.
//!
//! These tests drive the router with a mock user service, so no
//! database connection is required.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use chrono::Utc;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use user_api::api::{create_router, AppState};
use user_api::domain::{GetUserRequest, User, UserCreateRequest};
use user_api::errors::{AppError, AppResult};
use user_api::services::UserService;

/// Mock user service that fabricates users from the incoming request.
struct MockUserService {
    known_id: Uuid,
}

impl MockUserService {
    fn new(known_id: Uuid) -> Self {
        Self { known_id }
    }
}

#[async_trait]
impl UserService for MockUserService {
    async fn create(&self, req: UserCreateRequest) -> AppResult<User> {
        let violations = req.violations();
        if !violations.is_empty() {
            return Err(AppError::Validation(violations));
        }
        req.into_entity()
    }

    async fn get_user(&self, req: GetUserRequest) -> AppResult<User> {
        let violations = req.violations();
        if !violations.is_empty() {
            return Err(AppError::Validation(violations));
        }
        if req.id == self.known_id.to_string() {
            User::new(
                self.known_id,
                "Doe",
                "John",
                "john.doe@example.com",
                "secret-password",
                Utc::now(),
            )
        } else {
            Err(AppError::NotFound)
        }
    }
}

fn test_router(known_id: Uuid) -> axum::Router {
    let state = AppState::with_service(Arc::new(MockUserService::new(known_id)));
    create_router(state)
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_create_user_returns_created() {
    let app = test_router(Uuid::new_v4());

    let payload = json!({
        "lastname": "Doe",
        "firstname": "John",
        "email": "john.doe@example.com",
        "password": "secret-password"
    });

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/users")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response_json(response).await;
    assert_eq!(body["lastname"], "Doe");
    assert_eq!(body["firstname"], "John");
    assert_eq!(body["email"], "john.doe@example.com");
    assert!(body.get("password").is_none());
    assert!(body["id"].as_str().is_some());
    assert_eq!(body["created_at"], body["updated_at"]);
}

#[tokio::test]
async fn test_create_user_validation_error() {
    let app = test_router(Uuid::new_v4());

    let payload = json!({
        "lastname": "",
        "firstname": "John",
        "email": "not-an-email",
        "password": "short"
    });

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/users")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let details = body["error"]["details"].as_array().unwrap();
    assert_eq!(details.len(), 3);
    assert_eq!(details[0]["field"], "lastname");
    assert_eq!(details[0]["constraint"], "required");
    assert_eq!(details[1]["field"], "email");
    assert_eq!(details[1]["constraint"], "email");
    assert_eq!(details[2]["field"], "password");
    assert_eq!(details[2]["constraint"], "min");
    assert_eq!(details[2]["param"], "8");
}

#[tokio::test]
async fn test_create_user_malformed_body() {
    let app = test_router(Uuid::new_v4());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/users")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_get_user_found() {
    let id = Uuid::new_v4();
    let app = test_router(id);

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/users?id={id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["id"], id.to_string());
    assert_eq!(body["email"], "john.doe@example.com");
}

#[tokio::test]
async fn test_get_user_not_found() {
    let app = test_router(Uuid::new_v4());

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/users?id={}", Uuid::new_v4()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_get_user_missing_id() {
    let app = test_router(Uuid::new_v4());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/users")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["details"][0]["field"], "id");
    assert_eq!(body["error"]["details"][0]["constraint"], "required");
}

#[tokio::test]
async fn test_root_endpoint() {
    let app = test_router(Uuid::new_v4());

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"User API");
}

#[tokio::test]
async fn test_health_without_database() {
    let app = test_router(Uuid::new_v4());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"]["status"], "not configured");
}
