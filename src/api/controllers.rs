//! Transport-agnostic user controller.

use std::sync::Arc;

use crate::api::context::{Context, ContextExt};
use crate::domain::{GetUserRequest, GetUserResponse, UserCreateRequest};
use crate::errors::AppResult;
use crate::services::UserService;

/// Drives user use cases against any [`Context`] implementation.
pub struct UserController {
    users: Arc<dyn UserService>,
}

impl UserController {
    pub fn new(users: Arc<dyn UserService>) -> Self {
        Self { users }
    }

    /// Bind a creation payload, run the use case and respond with the
    /// created user.
    pub async fn create_user<C: Context>(&self, ctx: &mut C) -> AppResult<()> {
        let req: UserCreateRequest = ctx.bind()?;
        let user = self.users.create(req).await?;
        ctx.respond(&GetUserResponse::from(&user))
    }

    /// Read the `id` query parameter, run the fetch use case and
    /// respond with the user.
    pub async fn get_user<C: Context>(&self, ctx: &mut C) -> AppResult<()> {
        let req = GetUserRequest {
            id: ctx.query("id", ""),
        };
        let user = self.users.get_user(req).await?;
        ctx.respond(&GetUserResponse::from(&user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MockUserRepository, User};
    use crate::errors::AppError;
    use crate::services::UserManager;
    use serde_json::{json, Value};
    use std::collections::HashMap;

    struct FakeContext {
        body: Value,
        query: HashMap<String, String>,
        response: Option<Value>,
    }

    impl Context for FakeContext {
        fn bind_raw(&self) -> AppResult<Value> {
            Ok(self.body.clone())
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

    fn controller(repo: MockUserRepository) -> UserController {
        UserController::new(Arc::new(UserManager::new(Arc::new(repo))))
    }

    #[tokio::test]
    async fn create_user_responds_with_created_user() {
        let mut repo = MockUserRepository::new();
        repo.expect_create_user().times(1).returning(|_| Ok(()));

        let mut ctx = FakeContext {
            body: json!({
                "lastname": "Doe",
                "firstname": "John",
                "email": "john.doe@example.com",
                "password": "secret-password"
            }),
            query: HashMap::new(),
            response: None,
        };

        controller(repo).create_user(&mut ctx).await.unwrap();

        let body = ctx.response.unwrap();
        assert_eq!(body["lastname"], "Doe");
        assert_eq!(body["email"], "john.doe@example.com");
        assert!(body.get("password").is_none());
    }

    #[tokio::test]
    async fn get_user_reads_id_from_query() {
        let user = User::new(
            uuid::Uuid::new_v4(),
            "Doe",
            "John",
            "john.doe@example.com",
            "secret-password",
            chrono::Utc::now(),
        )
        .unwrap();
        let id = user.id.to_string();

        let mut repo = MockUserRepository::new();
        let lookup = id.clone();
        repo.expect_get_user()
            .withf(move |candidate| candidate == lookup)
            .times(1)
            .returning(move |_| Ok(user.clone()));

        let mut ctx = FakeContext {
            body: Value::Null,
            query: HashMap::from([("id".to_string(), id.clone())]),
            response: None,
        };

        controller(repo).get_user(&mut ctx).await.unwrap();

        let body = ctx.response.unwrap();
        assert_eq!(body["id"], id);
    }

    #[tokio::test]
    async fn get_user_without_id_fails_validation() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_user().times(0);

        let mut ctx = FakeContext {
            body: Value::Null,
            query: HashMap::new(),
            response: None,
        };

        let err = controller(repo).get_user(&mut ctx).await.unwrap_err();
        match err {
            AppError::Validation(violations) => {
                assert_eq!(violations[0].field, "id");
                assert_eq!(violations[0].constraint, "required");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
