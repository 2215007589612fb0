use async_trait::async_trait;

use super::domain::{User, UserInput};
use crate::errors::ServiceError;

/// Storage adapter for user accounts.
///
/// Implementations assign ids (strictly increasing, never reused), keep
/// storage order for `list`, and make each mutation durable before returning
/// `Ok`. Input arrives already validated by [`super::UserService`].
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<User>, ServiceError>;
    async fn get(&self, id: i32) -> Result<User, ServiceError>;
    async fn create(&self, input: UserInput) -> Result<User, ServiceError>;
    async fn update(&self, id: i32, input: UserInput) -> Result<User, ServiceError>;
    async fn delete(&self, id: i32) -> Result<(), ServiceError>;

    /// Short backend name for logs.
    fn backend(&self) -> &'static str;
}
