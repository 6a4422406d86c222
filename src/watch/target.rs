// src/watch/target.rs

use std::path::{Path, PathBuf};

use tracing::trace;

use crate::errors::{GowatchError, Result};
use crate::fs::{FileStamp, FileSystem};

/// The watched file together with its last observed size and mtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchTarget {
    path: PathBuf,
    last: FileStamp,
}

impl WatchTarget {
    /// Stat `path` once to record the baseline.
    pub fn new(fs: &dyn FileSystem, path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let last = stat(fs, &path)?;
        Ok(Self { path, last })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn last(&self) -> FileStamp {
        self.last
    }

    /// Re-stat the file and report whether size or mtime moved.
    ///
    /// The recorded stamp is replaced on every successful call.
    pub fn observe(&mut self, fs: &dyn FileSystem) -> Result<bool> {
        let current = stat(fs, &self.path)?;
        let changed = differs(&self.last, &current);
        trace!(path = ?self.path, ?current, changed, "observed file stamp");
        self.last = current;
        Ok(changed)
    }
}

/// Size or modification time differ.
pub fn differs(previous: &FileStamp, current: &FileStamp) -> bool {
    previous.size != current.size || previous.modified != current.modified
}

fn stat(fs: &dyn FileSystem, path: &Path) -> Result<FileStamp> {
    fs.stat(path).map_err(|source| GowatchError::StatFailed {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::mock::MockFileSystem;

    const FILE: &str = "/w/main.go";

    #[test]
    fn unchanged_file_reports_no_change() {
        let fs = MockFileSystem::new();
        fs.add_file(FILE, 4);
        let mut target = WatchTarget::new(&fs, FILE).unwrap();

        assert!(!target.observe(&fs).unwrap());
        assert!(!target.observe(&fs).unwrap());
    }

    #[test]
    fn size_change_is_reported_once() {
        let fs = MockFileSystem::new();
        fs.add_file(FILE, 4);
        let mut target = WatchTarget::new(&fs, FILE).unwrap();

        fs.resize(FILE, 5);
        assert!(target.observe(&fs).unwrap());
        assert!(!target.observe(&fs).unwrap());
        assert_eq!(target.last().size, 5);
    }

    #[test]
    fn mtime_change_alone_is_reported() {
        let fs = MockFileSystem::new();
        fs.add_file(FILE, 4);
        let mut target = WatchTarget::new(&fs, FILE).unwrap();

        fs.touch(FILE);
        assert!(target.observe(&fs).unwrap());
    }

    #[test]
    fn missing_file_fails_at_creation() {
        let fs = MockFileSystem::new();
        let err = WatchTarget::new(&fs, FILE).unwrap_err();
        assert!(matches!(
            err,
            GowatchError::StatFailed { ref path, .. } if path == Path::new(FILE)
        ));
    }

    #[test]
    fn deleted_file_fails_observe() {
        let fs = MockFileSystem::new();
        fs.add_file(FILE, 4);
        let mut target = WatchTarget::new(&fs, FILE).unwrap();
        fs.remove(FILE);

        assert!(matches!(
            target.observe(&fs),
            Err(GowatchError::StatFailed { .. })
        ));
    }
}
