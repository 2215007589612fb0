use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::errors::ServiceError;
use crate::users::domain::{User, UserInput};
use crate::users::repository::UserRepository;
use models::user_account;

/// SeaORM-backed repository; ids come from the table's auto-increment key.
///
/// Each mutation runs in its own transaction on a pooled connection.
pub struct SeaOrmUserRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn list(&self) -> Result<Vec<User>, ServiceError> {
        let rows = user_account::list(&self.db).await?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn get(&self, id: i32) -> Result<User, ServiceError> {
        user_account::find(&self.db, id)
            .await?
            .map(User::from)
            .ok_or(ServiceError::NotFound(id))
    }

    async fn create(&self, input: UserInput) -> Result<User, ServiceError> {
        let txn = self.db.begin().await?;
        let created = user_account::create(&txn, &input.email, &input.name, input.date_of_birth, &input.postcode).await?;
        txn.commit().await?;
        Ok(created.into())
    }

    // single statement, committed on its own
    async fn update(&self, id: i32, input: UserInput) -> Result<User, ServiceError> {
        let updated = user_account::replace(&self.db, id, &input.email, &input.name, input.date_of_birth, &input.postcode).await?;
        Ok(updated.into())
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let txn = self.db.begin().await?;
        user_account::delete(&txn, id).await?;
        txn.commit().await?;
        Ok(())
    }

    fn backend(&self) -> &'static str { "database" }
}
