use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{next_id_after, position, take_id};
use crate::errors::ServiceError;
use crate::storage::json_list_store::JsonListStore;
use crate::users::domain::{User, UserInput};
use crate::users::repository::UserRepository;

/// Users persisted as one JSON array (`data/users.json` by default).
///
/// The whole list is loaded on open and rewritten after every mutation.
pub struct JsonFileUserRepository {
    store: JsonListStore<User>,
    // held across the whole create so a failed write does not burn an id
    next_id: Mutex<i32>,
}

impl JsonFileUserRepository {
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Self, ServiceError> {
        let store = JsonListStore::<User>::open(path).await?;
        let next_id = store.read(next_id_after).await;
        Ok(Self { store, next_id: Mutex::new(next_id) })
    }
}

#[async_trait]
impl UserRepository for JsonFileUserRepository {
    async fn list(&self) -> Result<Vec<User>, ServiceError> {
        Ok(self.store.snapshot().await)
    }

    async fn get(&self, id: i32) -> Result<User, ServiceError> {
        self.store
            .read(|users| position(users, id).map(|idx| users[idx].clone()))
            .await
    }

    async fn create(&self, input: UserInput) -> Result<User, ServiceError> {
        let mut next_id = self.next_id.lock().await;
        let mut counter = *next_id;
        let user = self
            .store
            .mutate(|users| {
                let user = input.into_user(take_id(&mut counter)?);
                users.push(user.clone());
                Ok(user)
            })
            .await?;
        *next_id = counter;
        Ok(user)
    }

    async fn update(&self, id: i32, input: UserInput) -> Result<User, ServiceError> {
        self.store
            .mutate(|users| {
                let idx = position(users, id)?;
                users[idx].replace_with(input);
                Ok(users[idx].clone())
            })
            .await
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.store
            .mutate(|users| {
                let idx = position(users, id)?;
                users.remove(idx);
                Ok(())
            })
            .await
    }

    fn backend(&self) -> &'static str { "file" }
}
