use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::domain::{User, UserInput};
use super::repository::UserRepository;
use crate::errors::ServiceError;

/// User account business service independent of web framework and storage.
#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self { Self { repo } }

    pub fn backend(&self) -> &'static str { self.repo.backend() }

    /// All users in storage order.
    #[instrument(skip(self), fields(backend = self.repo.backend()))]
    pub async fn list(&self) -> Result<Vec<User>, ServiceError> {
        let users = self.repo.list().await?;
        debug!(count = users.len(), "users_listed");
        Ok(users)
    }

    #[instrument(skip(self), fields(backend = self.repo.backend()))]
    pub async fn get(&self, id: i32) -> Result<User, ServiceError> {
        self.repo.get(id).await
    }

    /// Validate and store a new user; the repository assigns the id.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::users::{UserInput, UserService, repo::MemoryUserRepository};
    /// let svc = UserService::new(Arc::new(MemoryUserRepository::default()));
    /// let input = UserInput {
    ///     email: "a@x.com".into(),
    ///     name: "A".into(),
    ///     date_of_birth: chrono::NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
    ///     postcode: "N1".into(),
    /// };
    /// let user = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert_eq!(user.id, 1);
    /// ```
    #[instrument(skip(self, input), fields(backend = self.repo.backend()))]
    pub async fn create(&self, input: UserInput) -> Result<User, ServiceError> {
        input.validate()?;
        let user = self.repo.create(input).await?;
        info!(user_id = user.id, "user_created");
        Ok(user)
    }

    /// Replace every mutable field of user `id`.
    #[instrument(skip(self, input), fields(backend = self.repo.backend()))]
    pub async fn update(&self, id: i32, input: UserInput) -> Result<User, ServiceError> {
        input.validate()?;
        let user = self.repo.update(id, input).await?;
        info!(user_id = user.id, "user_updated");
        Ok(user)
    }

    #[instrument(skip(self), fields(backend = self.repo.backend()))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.repo.delete(id).await?;
        info!(user_id = id, "user_deleted");
        Ok(())
    }
}
