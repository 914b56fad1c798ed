//! File access for the path-oriented entry point.
//!
//! [`paperwork`](crate::paperwork) reads through [`RealFileSystem`];
//! [`paperwork_with_fs`](crate::paperwork_with_fs) takes any other
//! [`FileSystem`], e.g. an in-memory one in tests or a virtual file system in
//! a bundler.

use std::io;
use std::path::Path;

/// Read-only file access.
pub trait FileSystem: std::fmt::Debug {
    /// Read the whole file as UTF-8 text.
    ///
    /// Errors are reported to the caller unmodified, wrapped only with the
    /// path that failed.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// Delegates to [`std::fs`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}
