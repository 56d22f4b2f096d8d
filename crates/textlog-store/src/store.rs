// ABOUTME: File-backed append-only log stored as logs.txt inside a storage directory.
// ABOUTME: Handles idempotent directory setup, append-mode record writes, and reads for streaming.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs::{File, OpenOptions};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use crate::record::Record;

/// Name of the log file inside the storage directory.
pub const LOG_FILE_NAME: &str = "logs.txt";

/// Errors that can occur during log store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to create log directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no data received")]
    EmptyRecord,

    #[error("failed to {op} log file {}: {source}", .path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// An append-only text log backed by `<dir>/logs.txt`.
///
/// Each record is one line. The file is created on the first append, and
/// every operation opens and releases its own handle, so the store holds no
/// open files between requests. There is no in-process locking: concurrent
/// appends rely on the OS append-mode guarantees for a single write.
#[derive(Debug, Clone)]
pub struct LogStore {
    dir: PathBuf,
    path: PathBuf,
}

impl LogStore {
    /// Open a store rooted at `dir`, creating the directory and any missing
    /// parents. Calling this again on an existing directory is a no-op and
    /// leaves the log untouched.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        create_dir(&dir).map_err(|source| StoreError::CreateDir {
            path: dir.clone(),
            source,
        })?;

        let path = dir.join(LOG_FILE_NAME);
        tracing::debug!("log store ready at {}", path.display());
        Ok(Self { dir, path })
    }

    /// Returns the storage directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Validate a raw payload and append it to the log as a single line.
    /// The file is opened in append-create mode and closed before returning.
    pub async fn append(&self, raw: &[u8]) -> Result<Record, StoreError> {
        let record = Record::parse(raw)?;

        let mut options = OpenOptions::new();
        options.create(true).append(true);
        #[cfg(unix)]
        options.mode(0o644);

        let mut file = options
            .open(&self.path)
            .await
            .map_err(|source| self.io_error("open", source))?;

        file.write_all(&record.to_line())
            .await
            .map_err(|source| self.io_error("write", source))?;
        // tokio buffers file writes; flush so the data has reached the OS
        // before the caller is told it succeeded.
        file.flush()
            .await
            .map_err(|source| self.io_error("write", source))?;

        Ok(record)
    }

    /// Open the log for reading. Returns `Ok(None)` when nothing has been
    /// appended yet, which callers treat as an empty log.
    pub async fn open_reader(&self) -> Result<Option<File>, StoreError> {
        match File::open(&self.path).await {
            Ok(file) => Ok(Some(file)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(self.io_error("open", source)),
        }
    }

    /// Read the whole log into memory. Empty if the log does not exist yet.
    pub async fn read_all(&self) -> Result<Vec<u8>, StoreError> {
        let Some(mut file) = self.open_reader().await? else {
            return Ok(Vec::new());
        };

        let mut content = Vec::new();
        file.read_to_end(&mut content)
            .await
            .map_err(|source| self.io_error("read", source))?;
        Ok(content)
    }

    fn io_error(&self, op: &'static str, source: io::Error) -> StoreError {
        StoreError::Io {
            op,
            path: self.path.clone(),
            source,
        }
    }
}

fn create_dir(dir: &Path) -> io::Result<()> {
    let mut builder = std::fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }
    builder.create(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, LogStore) {
        let dir = TempDir::new().unwrap();
        let store = LogStore::open(dir.path().join("storage")).unwrap();
        (dir, store)
    }

    #[test]
    fn open_creates_nested_directories() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("a").join("b").join("c");

        let store = LogStore::open(&root).unwrap();

        assert!(root.is_dir());
        assert_eq!(store.dir(), root.as_path());
        assert_eq!(store.path(), root.join("logs.txt").as_path());
        // The log file itself is created lazily
        assert!(!store.path().exists());
    }

    #[test]
    fn open_fails_when_directory_cannot_be_created() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, b"file in the way").unwrap();

        let result = LogStore::open(blocker.join("storage"));

        assert!(
            matches!(result, Err(StoreError::CreateDir { .. })),
            "expected CreateDir error, got {:?}",
            result
        );
    }

    #[tokio::test]
    async fn open_is_idempotent_and_preserves_content() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("storage");

        let store = LogStore::open(&root).unwrap();
        store.append(b"first").await.unwrap();

        let reopened = LogStore::open(&root).unwrap();
        let again = LogStore::open(&root).unwrap();

        assert_eq!(reopened.read_all().await.unwrap(), b"first\n");
        assert_eq!(again.read_all().await.unwrap(), b"first\n");
    }

    #[tokio::test]
    async fn read_all_on_fresh_store_is_empty() {
        let (_dir, store) = temp_store();

        assert!(store.open_reader().await.unwrap().is_none());
        assert!(store.read_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn appends_are_read_back_in_order() {
        let (_dir, store) = temp_store();

        store.append(b"x").await.unwrap();
        store.append(b"y").await.unwrap();

        assert_eq!(store.read_all().await.unwrap(), b"x\ny\n");
    }

    #[tokio::test]
    async fn append_stores_trimmed_record() {
        let (_dir, store) = temp_store();

        let record = store.append(b"  padded entry \n").await.unwrap();

        assert_eq!(record.as_bytes(), b"padded entry");
        assert_eq!(store.read_all().await.unwrap(), b"padded entry\n");
    }

    #[tokio::test]
    async fn empty_append_is_rejected_without_touching_the_log() {
        let (_dir, store) = temp_store();

        let result = store.append(b"   \n").await;
        assert!(matches!(result, Err(StoreError::EmptyRecord)));
        assert!(!store.path().exists(), "rejected append must not create the file");

        store.append(b"kept").await.unwrap();
        let result = store.append(b"").await;
        assert!(matches!(result, Err(StoreError::EmptyRecord)));
        assert_eq!(store.read_all().await.unwrap(), b"kept\n");
    }

    #[tokio::test]
    async fn append_extends_a_log_from_a_previous_run() {
        let (_dir, store) = temp_store();
        std::fs::write(store.path(), b"old entry\n").unwrap();

        store.append(b"new entry").await.unwrap();

        assert_eq!(store.read_all().await.unwrap(), b"old entry\nnew entry\n");
    }

    #[tokio::test]
    async fn append_reports_io_error_when_log_path_is_unusable() {
        let (_dir, store) = temp_store();
        // A directory where the log file should be makes the open fail
        std::fs::create_dir(store.path()).unwrap();

        let result = store.append(b"entry").await;

        match result {
            Err(StoreError::Io { op, path, .. }) => {
                assert_eq!(op, "open");
                assert_eq!(path, store.path());
            }
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn log_file_is_not_group_or_world_writable() {
        use std::os::unix::fs::PermissionsExt;

        let (_dir, store) = temp_store();
        store.append(b"entry").await.unwrap();

        let mode = std::fs::metadata(store.path()).unwrap().permissions().mode();
        // umask can only clear bits, never add them
        assert_eq!(mode & 0o777 & !0o644, 0);
    }
}
