use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{next_id_after, position, take_id};
use crate::errors::ServiceError;
use crate::users::domain::{User, UserInput};
use crate::users::repository::UserRepository;

struct State {
    users: Vec<User>,
    next_id: i32,
}

/// Process-local backend; contents vanish on restart.
pub struct MemoryUserRepository {
    state: RwLock<State>,
}

impl Default for MemoryUserRepository {
    fn default() -> Self { Self::with_users(Vec::new()) }
}

impl MemoryUserRepository {
    /// Start from a fixed list; new ids continue after the highest seeded id.
    pub fn with_users(users: Vec<User>) -> Self {
        let next_id = next_id_after(&users);
        Self { state: RwLock::new(State { users, next_id }) }
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, ServiceError> {
        Ok(self.state.read().await.users.clone())
    }

    async fn get(&self, id: i32) -> Result<User, ServiceError> {
        let state = self.state.read().await;
        let idx = position(&state.users, id)?;
        Ok(state.users[idx].clone())
    }

    async fn create(&self, input: UserInput) -> Result<User, ServiceError> {
        let mut state = self.state.write().await;
        let id = take_id(&mut state.next_id)?;
        let user = input.into_user(id);
        state.users.push(user.clone());
        Ok(user)
    }

    async fn update(&self, id: i32, input: UserInput) -> Result<User, ServiceError> {
        let mut state = self.state.write().await;
        let idx = position(&state.users, id)?;
        let user = &mut state.users[idx];
        user.replace_with(input);
        Ok(user.clone())
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let mut state = self.state.write().await;
        let idx = position(&state.users, id)?;
        state.users.remove(idx);
        Ok(())
    }

    fn backend(&self) -> &'static str { "memory" }
}
