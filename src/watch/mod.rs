// src/watch/mod.rs

//! Change detection for the single watched source file.
//!
//! There is no OS notification layer: the file is stat-ed once per poll
//! interval and its size and modification time are compared with the
//! previous observation.

pub mod poller;
pub mod target;

pub use poller::{spawn_watcher, watch_file};
pub use target::WatchTarget;
