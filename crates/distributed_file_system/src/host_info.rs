//! Model of a host in DFS.
use std::collections::BTreeSet;

pub type ChunkId = u64;

/// Model of a host in DFS.
#[derive(Clone, Debug, Default)]
pub struct HostInfo {
    /// Amount of free space left on a host.
    pub free_space: u64,
    /// Set of all chunks on a host.
    pub chunks: BTreeSet<ChunkId>,
}

impl HostInfo {
    /// Creates an empty host with `free_space` bytes available.
    pub fn with_free_space(free_space: u64) -> Self {
        Self {
            free_space,
            chunks: BTreeSet::new(),
        }
    }
}
