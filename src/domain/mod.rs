//! Domain layer: value objects, the user entity, persistence ports
//! and the transport-facing request/response types.

mod email;
mod password;
pub mod repository;
pub mod requests;
pub mod responses;
mod user;

pub use email::Email;
pub use password::Password;
pub use repository::{TransactionContext, TxFuture, UnitOfWork, UserRepository};
pub use requests::{GetUserRequest, UserCreateRequest};
pub use responses::{GetUserResponse, LoginResponse};
pub use user::User;

#[cfg(any(test, feature = "test-utils"))]
pub use repository::MockUserRepository;
