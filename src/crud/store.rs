//! Filesystem access for the handlers.

use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;
use std::time::SystemTime;

/// Contents and modification time of an opened document.
#[derive(Debug, Clone)]
pub struct StoredFile {
    pub content: String,
    pub last_modified: SystemTime,
}

/// Read-only view of the documents the handlers may touch.
///
/// Errors of kind [`io::ErrorKind::NotFound`] become 404; every other
/// error becomes 400.
pub trait FileStore: Send + Sync {
    fn open(&self, path: &str) -> io::Result<StoredFile>;

    /// Checks that `path` can be opened, without reading it.
    fn probe(&self, path: &str) -> io::Result<()> {
        self.open(path).map(|_| ())
    }
}

/// Documents on the local disk, resolved against a root directory.
#[derive(Debug, Clone)]
pub struct LocalFileStore {
    root: PathBuf,
}

impl LocalFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl FileStore for LocalFileStore {
    fn open(&self, path: &str) -> io::Result<StoredFile> {
        let mut file = File::open(self.root.join(path))?;
        let last_modified = file.metadata()?.modified()?;

        let mut content = String::new();
        file.read_to_string(&mut content)?;

        Ok(StoredFile {
            content,
            last_modified,
        })
    }

    fn probe(&self, path: &str) -> io::Result<()> {
        File::open(self.root.join(path)).map(|_| ())
    }
}
