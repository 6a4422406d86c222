// src/fs/mock.rs

use super::{FileStamp, FileSystem};
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime};

/// In-memory filesystem holding only stat results.
///
/// Clones share state, so a test can keep one handle and mutate files while
/// the watcher polls through another.
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    files: Arc<Mutex<HashMap<PathBuf, FileStamp>>>,
    stats: Arc<AtomicUsize>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&self, path: impl AsRef<Path>, size: u64) {
        self.set_stamp(
            path,
            FileStamp {
                size,
                modified: SystemTime::UNIX_EPOCH,
            },
        );
    }

    pub fn set_stamp(&self, path: impl AsRef<Path>, stamp: FileStamp) {
        let mut files = self.files.lock().unwrap();
        files.insert(path.as_ref().to_path_buf(), stamp);
    }

    /// Change the size, keeping the modification time.
    pub fn resize(&self, path: impl AsRef<Path>, size: u64) {
        let mut files = self.files.lock().unwrap();
        if let Some(stamp) = files.get_mut(path.as_ref()) {
            stamp.size = size;
        }
    }

    /// Advance the modification time by one second, keeping the size.
    pub fn touch(&self, path: impl AsRef<Path>) {
        let mut files = self.files.lock().unwrap();
        if let Some(stamp) = files.get_mut(path.as_ref()) {
            stamp.modified += Duration::from_secs(1);
        }
    }

    pub fn remove(&self, path: impl AsRef<Path>) {
        let mut files = self.files.lock().unwrap();
        files.remove(path.as_ref());
    }

    /// Number of `stat` calls served so far (successful or not).
    pub fn stat_count(&self) -> usize {
        self.stats.load(Ordering::SeqCst)
    }
}

impl FileSystem for MockFileSystem {
    fn stat(&self, path: &Path) -> io::Result<FileStamp> {
        self.stats.fetch_add(1, Ordering::SeqCst);
        let files = self.files.lock().unwrap();
        files.get(path).copied().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("File not found: {path:?}"))
        })
    }
}
