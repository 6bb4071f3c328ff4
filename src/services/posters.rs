use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::{AppError, AppResult};

/// Poster asset collaborator
///
/// The Movie Directory asks this to discard the poster that belonged to a
/// deleted movie; the asset lifecycle itself (uploads, serving) lives
/// outside the catalog core.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PosterStore: Send + Sync {
    /// Removes the stored asset. A reference that no longer resolves to an
    /// asset is not an error.
    async fn remove(&self, poster_path: &str) -> AppResult<()>;
}

/// Filesystem-backed poster storage
pub struct FsPosterStore {
    dir: PathBuf,
}

impl FsPosterStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl PosterStore for FsPosterStore {
    async fn remove(&self, poster_path: &str) -> AppResult<()> {
        let path = self.dir.join(poster_path);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Internal(format!(
                "failed to remove poster {}: {e}",
                path.display()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_remove_missing_poster_is_ok() {
        let store = FsPosterStore::new(std::env::temp_dir());
        let name = format!("{}.jpg", uuid::Uuid::new_v4());
        assert!(store.remove(&name).await.is_ok());
    }

    #[tokio::test]
    async fn test_remove_deletes_existing_poster() {
        let dir = std::env::temp_dir();
        let name = format!("{}.jpg", uuid::Uuid::new_v4());
        let path = dir.join(&name);
        tokio::fs::write(&path, b"jpeg").await.unwrap();

        let store = FsPosterStore::new(&dir);
        store.remove(&name).await.unwrap();
        assert!(!path.exists());
    }
}
