use thiserror::Error;

use models::errors::ModelError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("No user with id={0}.")]
    NotFound(i32),
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl ServiceError {
    pub fn persistence(e: impl std::fmt::Display) -> Self { Self::Persistence(e.to_string()) }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::NotFound(id) => Self::NotFound(id),
            ModelError::Db(msg) => Self::Persistence(msg),
        }
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { Self::persistence(e) }
}
