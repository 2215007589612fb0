

use configs::DatabaseConfig;

/// Pool settings pointing at a fresh SQLite file under the temp dir.
pub fn temp_sqlite_config() -> DatabaseConfig {
    let path = std::env::temp_dir().join(format!("models_test_{}.db", uuid::Uuid::new_v4()));
    DatabaseConfig {
        url: format!("sqlite://{}?mode=rwc", path.display()),
        max_connections: 4,
        min_connections: 1,
        ..Default::default()
    }
}
