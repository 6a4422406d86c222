// src/fs/mod.rs

use std::fmt::Debug;
use std::fs;
use std::io;
use std::path::Path;
use std::time::SystemTime;

pub mod mock;

/// Metadata compared between two polls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStamp {
    pub size: u64,
    pub modified: SystemTime,
}

/// Abstract filesystem interface.
///
/// The watcher only needs `stat`; keeping it behind a trait lets tests drive
/// size/mtime changes without touching the disk.
pub trait FileSystem: Send + Sync + Debug {
    fn stat(&self, path: &Path) -> io::Result<FileStamp>;
}

/// Implementation that uses `std::fs`.
#[derive(Debug, Clone, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn stat(&self, path: &Path) -> io::Result<FileStamp> {
        let meta = fs::metadata(path)?;
        Ok(FileStamp {
            size: meta.len(),
            modified: meta.modified()?,
        })
    }
}
