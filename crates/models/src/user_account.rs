//! `user_account` entity and the row-level helpers the repository builds on.
use sea_orm::{entity::prelude::*, ConnectionTrait, NotSet, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_account")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub email: String,
    pub name: String,
    pub date_of_birth: Date,
    pub postcode: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// All rows in storage (primary key) order.
pub async fn list<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}

pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

/// Insert a row; the id comes from the table's sequence.
pub async fn create<C: ConnectionTrait>(
    db: &C,
    email: &str,
    name: &str,
    date_of_birth: Date,
    postcode: &str,
) -> Result<Model, ModelError> {
    let am = ActiveModel {
        id: NotSet,
        email: Set(email.to_string()),
        name: Set(name.to_string()),
        date_of_birth: Set(date_of_birth),
        postcode: Set(postcode.to_string()),
    };
    Ok(am.insert(db).await?)
}

/// Overwrite every mutable column of row `id` with one `UPDATE` statement.
///
/// No read precedes the write, so concurrent replaces on SQLite queue on the
/// write lock instead of failing a shared-to-reserved lock upgrade.
pub async fn replace<C: ConnectionTrait>(
    db: &C,
    id: i32,
    email: &str,
    name: &str,
    date_of_birth: Date,
    postcode: &str,
) -> Result<Model, ModelError> {
    let row = Model {
        id,
        email: email.to_string(),
        name: name.to_string(),
        date_of_birth,
        postcode: postcode.to_string(),
    };
    let am = ActiveModel {
        id: NotSet,
        email: Set(row.email.clone()),
        name: Set(row.name.clone()),
        date_of_birth: Set(row.date_of_birth),
        postcode: Set(row.postcode.clone()),
    };
    let res = Entity::update_many().set(am).filter(Column::Id.eq(id)).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ModelError::NotFound(id));
    }
    Ok(row)
}

pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<(), ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ModelError::NotFound(id));
    }
    Ok(())
}
