use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{NewsError, markup};

/// Shown when nothing has been published yet.
pub const PLACEHOLDER: &str = "No updates yet.";

/// The news text file.
///
/// Reads and writes are not coordinated; a query racing an update sees
/// either the old or the new text.
#[derive(Debug, Clone)]
pub struct NewsStore {
    path: PathBuf,
}

impl NewsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the stored text exactly as written, or `None` if the file
    /// does not exist.
    pub async fn load_raw(&self) -> Result<Option<String>, NewsError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(NewsError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Returns the news ready for display: trimmed and rendered, or
    /// [`PLACEHOLDER`] when the file is missing or blank.
    pub async fn load(&self) -> Result<String, NewsError> {
        let raw = self.load_raw().await?;

        let text = match raw.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => text,
            _ => {
                debug!(path = %self.path.display(), "no news stored, using placeholder");
                PLACEHOLDER
            }
        };

        Ok(markup::render(text))
    }

    /// Replaces the stored text with `text`, verbatim.
    pub async fn save(&self, text: &str) -> Result<(), NewsError> {
        tokio::fs::write(&self.path, text)
            .await
            .map_err(|source| NewsError::Write {
                path: self.path.clone(),
                source,
            })?;

        debug!(path = %self.path.display(), bytes = text.len(), "news saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> NewsStore {
        NewsStore::new(dir.path().join("update.txt"))
    }

    #[tokio::test]
    async fn missing_file_yields_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert_eq!(store.load_raw().await.unwrap(), None);
        assert_eq!(store.load().await.unwrap(), PLACEHOLDER);
    }

    #[tokio::test]
    async fn blank_file_yields_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save("  \n\t ").await.unwrap();

        assert_eq!(store.load().await.unwrap(), PLACEHOLDER);
    }

    #[tokio::test]
    async fn save_keeps_tags_and_load_renders_them() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let raw = "[b]Beta 2[/b][br][li]online lobbies ";

        store.save(raw).await.unwrap();

        let on_disk = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(on_disk, raw);
        assert_eq!(store.load_raw().await.unwrap().as_deref(), Some(raw));
        assert_eq!(store.load().await.unwrap(), "**Beta 2**\n• online lobbies");
    }

    #[tokio::test]
    async fn save_overwrites_previous_text() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save("a much longer first message").await.unwrap();
        store.save("short").await.unwrap();

        assert_eq!(store.load().await.unwrap(), "short");
    }

    #[tokio::test]
    async fn unreadable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be read as a file.
        let store = NewsStore::new(dir.path());

        let err = store.load().await.unwrap_err();
        assert!(matches!(err, NewsError::Read { .. }));
    }

    #[tokio::test]
    async fn save_into_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = NewsStore::new(dir.path().join("nope").join("update.txt"));

        let err = store.save("x").await.unwrap_err();
        assert!(matches!(err, NewsError::Write { .. }));
    }
}
