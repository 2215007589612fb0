//! Runtime environment helpers
//!
//! Picks and opens the configured user storage backend at startup.

use std::{path::{Path, PathBuf}, sync::Arc};

use configs::{AppConfig, DatabaseConfig, StorageBackend};
use tracing::info;

use crate::users::{
    repo::{JsonFileUserRepository, MemoryUserRepository, SeaOrmUserRepository},
    UserRepository,
};

/// Open the backend named in `cfg.storage`, creating directories and schema as needed.
pub async fn build_user_repository(cfg: &AppConfig) -> anyhow::Result<Arc<dyn UserRepository>> {
    let repo: Arc<dyn UserRepository> = match cfg.storage.backend {
        StorageBackend::Memory => Arc::new(MemoryUserRepository::default()),
        StorageBackend::File => {
            let path = Path::new(&cfg.storage.users_file);
            common::env::ensure_parent_dir(path).await?;
            Arc::new(JsonFileUserRepository::open(path).await?)
        }
        StorageBackend::Database => {
            if let Some(file) = sqlite_file(&cfg.database) {
                common::env::ensure_parent_dir(&file).await?;
            }
            let db = models::db::connect_and_migrate(&cfg.database).await?;
            Arc::new(SeaOrmUserRepository::new(db))
        }
    };
    info!(event = "storage_ready", backend = repo.backend(), "user repository opened");
    Ok(repo)
}

/// File behind a `sqlite:` URL, if it names one.
pub fn sqlite_file(cfg: &DatabaseConfig) -> Option<PathBuf> {
    if !cfg.is_sqlite() {
        return None;
    }
    let rest = cfg.url.splitn(2, ':').nth(1)?;
    let rest = rest.strip_prefix("//").unwrap_or(rest);
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path == ":memory:" {
        return None;
    }
    Some(PathBuf::from(path))
}
