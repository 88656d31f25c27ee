//! User orchestration service.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::{GetUserRequest, User, UserCreateRequest, UserRepository};
use crate::errors::{AppError, AppResult};

/// Use-case surface exposed to controllers.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Validate a creation request, build the entity and persist it.
    async fn create(&self, req: UserCreateRequest) -> AppResult<User>;

    /// Validate a fetch request and load the user.
    async fn get_user(&self, req: GetUserRequest) -> AppResult<User>;
}

/// Default [`UserService`] implementation over a repository port.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create(&self, req: UserCreateRequest) -> AppResult<User> {
        let violations = req.violations();
        if !violations.is_empty() {
            return Err(AppError::Validation(violations));
        }

        let user = req.into_entity()?;
        self.repo.create_user(user.clone()).await?;

        info!(user_id = %user.id, "user created");
        Ok(user)
    }

    async fn get_user(&self, req: GetUserRequest) -> AppResult<User> {
        let violations = req.violations();
        if !violations.is_empty() {
            return Err(AppError::Validation(violations));
        }

        self.repo.get_user(&req.id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MockUserRepository;

    fn create_request() -> UserCreateRequest {
        UserCreateRequest {
            lastname: "Doe".into(),
            firstname: "John".into(),
            email: "john.doe@example.com".into(),
            password: "secret-password".into(),
        }
    }

    #[tokio::test]
    async fn create_persists_valid_request() {
        let mut repo = MockUserRepository::new();
        repo.expect_create_user()
            .withf(|user| user.email.as_str() == "john.doe@example.com")
            .times(1)
            .returning(|_| Ok(()));

        let service = UserManager::new(Arc::new(repo));
        let user = service.create(create_request()).await.unwrap();

        assert_eq!(user.fullname(), "John Doe");
    }

    #[tokio::test]
    async fn create_rejects_invalid_request_before_persistence() {
        let mut repo = MockUserRepository::new();
        repo.expect_create_user().times(0);

        let service = UserManager::new(Arc::new(repo));
        let err = service
            .create(UserCreateRequest {
                lastname: String::new(),
                firstname: "John".into(),
                email: "not-an-email".into(),
                password: "short".into(),
            })
            .await
            .unwrap_err();

        match err {
            AppError::Validation(violations) => {
                assert_eq!(violations.len(), 3);
                assert_eq!(violations[0].field, "lastname");
                assert_eq!(violations[0].constraint, "required");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn get_user_rejects_malformed_id_before_persistence() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_user().times(0);

        let service = UserManager::new(Arc::new(repo));
        let err = service
            .get_user(GetUserRequest {
                id: "not-a-uuid".into(),
            })
            .await
            .unwrap_err();

        match err {
            AppError::Validation(violations) => {
                assert_eq!(violations[0].constraint, "uuid4");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
