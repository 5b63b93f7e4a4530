//! Error types for the directory differ
//!
//! The pure text comparisons never fail; only filesystem access can. A
//! failure on a root directory aborts the call, while per-path failures are
//! collected into the result so one unreadable file never hides the rest of
//! the tree.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while comparing directory trees
#[derive(Debug, Error)]
pub enum DirDiffError {
    /// A directory, or an entry below it, could not be enumerated
    #[error("failed to read directory entry {}: {}", path.display(), source)]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file's metadata or content could not be read for comparison
    #[error("failed to read file {}: {}", path.display(), source)]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DirDiffError {
    pub(crate) fn read_file(path: &Path, source: std::io::Error) -> Self {
        DirDiffError::ReadFile {
            path: path.to_path_buf(),
            source,
        }
    }
}
