#![cfg(test)]
use std::{path::PathBuf, sync::Arc};

use chrono::NaiveDate;
use configs::DatabaseConfig;
use sea_orm::DatabaseConnection;

use crate::users::{
    repo::{JsonFileUserRepository, MemoryUserRepository, SeaOrmUserRepository},
    UserInput, UserService,
};

/// Unique path under the temp dir; nothing is created.
pub fn temp_path(prefix: &str, ext: &str) -> PathBuf {
    std::env::temp_dir().join(format!("{prefix}_{}.{ext}", uuid::Uuid::new_v4()))
}

/// Fresh migrated SQLite database in its own temp file.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let cfg = DatabaseConfig {
        url: format!("sqlite://{}?mode=rwc", temp_path("service_test", "db").display()),
        max_connections: 4,
        min_connections: 1,
        ..Default::default()
    };
    models::db::connect_and_migrate(&cfg).await
}

/// Input whose email is `<tag>@x.com`.
pub fn sample_input(tag: &str) -> UserInput {
    UserInput {
        email: format!("{tag}@x.com"),
        name: tag.to_uppercase(),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
        postcode: "N1".into(),
    }
}

/// One empty service per backend.
pub async fn all_backends() -> Result<Vec<UserService>, anyhow::Error> {
    Ok(vec![
        UserService::new(Arc::new(MemoryUserRepository::default())),
        UserService::new(Arc::new(JsonFileUserRepository::open(temp_path("service_users", "json")).await?)),
        UserService::new(Arc::new(SeaOrmUserRepository::new(get_db().await?))),
    ])
}
