//! Records reported by a filesystem about files and their blocks.

use serde::{Deserialize, Serialize};

/// Replica set of one contiguous byte range of a file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockLocation {
    /// Offset of the range within the file.
    pub offset: u64,
    /// Length of the range in bytes.
    pub length: u64,
    /// Hosts holding a replica of the range.
    pub hosts: Vec<String>,
}

impl BlockLocation {
    pub fn new(offset: u64, length: u64, hosts: Vec<String>) -> Self {
        Self { offset, length, hosts }
    }

    /// First byte past the end of the range, saturating at `u64::MAX`.
    pub fn end(&self) -> u64 {
        self.offset.saturating_add(self.length)
    }
}

/// Status of a file as reported by a filesystem.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStatus {
    /// Path of the file.
    pub path: String,
    /// Total length of the file in bytes.
    pub len: u64,
}
