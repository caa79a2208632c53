//! Interface of a filesystem which can report where file blocks are stored.

use thiserror::Error;

use crate::block_location::{BlockLocation, FileStatus};

/// Failure while querying a filesystem.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("file '{path}' does not exist")]
    NotFound { path: String },

    #[error("filesystem is unreachable")]
    Unreachable,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Filesystem which can report file status and block locations.
pub trait FileSystem {
    /// Returns status of the file at `path`.
    fn file_status(&self, path: &str) -> Result<FileStatus, FsError>;

    /// Returns locations of all blocks overlapping `[offset, offset + length)` of the file.
    /// * `status` --- status previously returned by [FileSystem::file_status].
    /// * `offset` --- first byte of the range.
    /// * `length` --- length of the range.
    fn block_locations(&self, status: &FileStatus, offset: u64, length: u64) -> Result<Vec<BlockLocation>, FsError>;
}
