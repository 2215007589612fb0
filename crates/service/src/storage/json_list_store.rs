use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use tokio::{fs, io::AsyncWriteExt, sync::RwLock};
use tracing::{debug, warn};

use crate::errors::ServiceError;

/// Generic JSON file-backed ordered list store.
///
/// Keeps a `Vec<V>` in memory and mirrors it to a JSON array on disk. A file
/// that is missing or unparsable at open time yields an empty list. Writes go
/// to a sibling temp file, flushed to disk, then renamed over the target, so
/// readers of the file never see a half-written array and an acknowledged
/// write survives a crash.
pub struct JsonListStore<V> {
    inner: RwLock<Vec<V>>,
    file_path: PathBuf,
}

impl<V> JsonListStore<V>
where
    V: Serialize + DeserializeOwned + Clone + Send + Sync,
{
    /// Load the list from `path`; the file itself is only written on the first mutation.
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Self, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(ServiceError::persistence)?;
        }

        let items: Vec<V> = match fs::read(&file_path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_else(|e| {
                warn!(path = %file_path.display(), error = %e, "unreadable store file; starting empty");
                Vec::new()
            }),
            Err(e) => {
                debug!(path = %file_path.display(), error = %e, "store file absent; starting empty");
                Vec::new()
            }
        };

        Ok(Self { inner: RwLock::new(items), file_path })
    }

    pub fn path(&self) -> &Path { &self.file_path }

    /// Clone of the current list.
    pub async fn snapshot(&self) -> Vec<V> {
        self.inner.read().await.clone()
    }

    /// Run a read-only closure against the list.
    pub async fn read<R>(&self, f: impl FnOnce(&[V]) -> R) -> R {
        let items = self.inner.read().await;
        f(&items)
    }

    /// Apply a mutation and persist it.
    ///
    /// The write lock is held from the mutation until the file is replaced, so
    /// mutations are serialized. The closure works on a copy: if it fails or
    /// the write fails, the in-memory list is left as it was.
    pub async fn mutate<R>(
        &self,
        f: impl FnOnce(&mut Vec<V>) -> Result<R, ServiceError>,
    ) -> Result<R, ServiceError> {
        let mut items = self.inner.write().await;
        let mut draft = items.clone();
        let out = f(&mut draft)?;
        self.save(&draft).await?;
        *items = draft;
        Ok(out)
    }

    async fn save(&self, items: &[V]) -> Result<(), ServiceError> {
        let data = serde_json::to_vec_pretty(items).map_err(ServiceError::persistence)?;
        let tmp = tmp_path(&self.file_path);
        let written = match write_synced(&tmp, &data).await {
            Ok(()) => fs::rename(&tmp, &self.file_path).await,
            Err(e) => Err(e),
        };
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp).await;
            return Err(ServiceError::persistence(e));
        }
        Ok(())
    }
}

async fn write_synced(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(path).await?;
    file.write_all(data).await?;
    file.sync_all().await
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
