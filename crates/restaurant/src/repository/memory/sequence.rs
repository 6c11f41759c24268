use crate::abstract_trait::sequence::SequenceStoreTrait;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::{io::ErrorKind, path::PathBuf};
use tokio::sync::Mutex;
use tracing::{error, info};

/// Counter kept in process memory, optionally mirrored to a snapshot file
/// that is rewritten on every change and read back on startup.
#[derive(Debug, Default)]
pub struct InMemorySequenceStore {
    last_issued: Mutex<u32>,
    snapshot: Option<PathBuf>,
}

impl InMemorySequenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(last_issued: u32) -> Self {
        Self {
            last_issued: Mutex::new(last_issued),
            snapshot: None,
        }
    }

    /// Resumes from `path` when it exists, otherwise starts at 0.
    pub async fn with_snapshot(path: impl Into<PathBuf>) -> Result<Self, RepositoryError> {
        let path = path.into();

        let last_issued = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw.trim().parse::<u32>().map_err(|_| {
                RepositoryError::Custom(format!(
                    "sequence snapshot {} holds {:?}",
                    path.display(),
                    raw.trim()
                ))
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => 0,
            Err(e) => {
                return Err(RepositoryError::Unavailable(format!(
                    "cannot read sequence snapshot {}: {e}",
                    path.display()
                )));
            }
        };

        info!(
            "💾 Order sequence restored at {last_issued} from {}",
            path.display()
        );

        Ok(Self {
            last_issued: Mutex::new(last_issued),
            snapshot: Some(path),
        })
    }

    /// Writes the snapshot first; the in-memory value only moves once the
    /// file does.
    async fn store(&self, current: &mut u32, value: u32) -> Result<(), RepositoryError> {
        if let Some(path) = &self.snapshot {
            let staging = path.with_extension("tmp");

            let written = async {
                tokio::fs::write(&staging, value.to_string()).await?;
                tokio::fs::rename(&staging, path).await
            }
            .await;

            if let Err(e) = written {
                error!("❌ Failed to write sequence snapshot {}: {e}", path.display());
                return Err(RepositoryError::Unavailable(format!(
                    "cannot write sequence snapshot: {e}"
                )));
            }
        }

        *current = value;
        Ok(())
    }
}

#[async_trait]
impl SequenceStoreTrait for InMemorySequenceStore {
    async fn read(&self) -> Result<u32, RepositoryError> {
        Ok(*self.last_issued.lock().await)
    }

    async fn compare_and_set(
        &self,
        expected: u32,
        new_value: u32,
    ) -> Result<bool, RepositoryError> {
        let mut current = self.last_issued.lock().await;
        if *current != expected {
            return Ok(false);
        }
        self.store(&mut current, new_value).await?;
        Ok(true)
    }

    async fn reset(&self) -> Result<(), RepositoryError> {
        let mut current = self.last_issued.lock().await;
        self.store(&mut current, 0).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn snapshot_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "restaurant-sequence-{}-{name}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("sequence");
        let _ = std::fs::remove_file(&path);
        path
    }

    #[tokio::test]
    async fn compare_and_set_rejects_stale_expectation() {
        let store = InMemorySequenceStore::starting_at(7);

        assert!(!store.compare_and_set(6, 7).await.unwrap());
        assert!(store.compare_and_set(7, 8).await.unwrap());
        assert_eq!(store.read().await.unwrap(), 8);

        store.reset().await.unwrap();
        assert_eq!(store.read().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn snapshot_survives_a_restart() {
        let path = snapshot_path("restart");

        let store = InMemorySequenceStore::with_snapshot(&path).await.unwrap();
        assert_eq!(store.read().await.unwrap(), 0);
        assert!(store.compare_and_set(0, 1).await.unwrap());
        assert!(store.compare_and_set(1, 2).await.unwrap());
        drop(store);

        let restarted = InMemorySequenceStore::with_snapshot(&path).await.unwrap();
        assert_eq!(restarted.read().await.unwrap(), 2);

        restarted.reset().await.unwrap();
        let restarted = InMemorySequenceStore::with_snapshot(&path).await.unwrap();
        assert_eq!(restarted.read().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn corrupt_snapshot_is_rejected() {
        let path = snapshot_path("corrupt");
        std::fs::write(&path, "forty-one").unwrap();

        let err = InMemorySequenceStore::with_snapshot(&path).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Custom(_)));
    }

    #[tokio::test]
    async fn failed_snapshot_write_leaves_value_unchanged() {
        let store = InMemorySequenceStore {
            last_issued: Mutex::new(4),
            snapshot: Some(Path::new("/nonexistent/dir/sequence").to_path_buf()),
        };

        assert!(store.compare_and_set(4, 5).await.is_err());
        assert!(store.reset().await.is_err());
        assert_eq!(store.read().await.unwrap(), 4);
    }
}
