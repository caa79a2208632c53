//! Model of a distributed file system.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use log::debug;
use thiserror::Error;

use crate::{
    block_location::{BlockLocation, FileStatus},
    file_system::{FileSystem, FsError},
    host_info::{ChunkId, HostInfo},
};

/// Errors which can occur while building or changing the model.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("chunk size must be positive")]
    InvalidChunkSize,

    #[error("file '{path}' already exists")]
    FileExists { path: String },

    #[error("unknown host '{host}'")]
    UnknownHost { host: String },

    #[error("file '{path}' has {chunks} chunks but replicas are given for {replicas}")]
    ReplicaCountMismatch { path: String, chunks: u64, replicas: usize },

    #[error("chunk {chunk_id} does not exist")]
    NoSuchChunk { chunk_id: ChunkId },

    #[error("chunk {chunk_id} does not exist on host '{host}'")]
    NoSuchChunkOnHost { host: String, chunk_id: ChunkId },

    #[error("chunk {chunk_id} already exists on host '{host}'")]
    ChunkAlreadyExists { host: String, chunk_id: ChunkId },

    #[error("host '{host}' has {free_space} bytes free, {need_space} needed")]
    NotEnoughSpace { host: String, free_space: u64, need_space: u64 },
}

struct FileEntry {
    size: u64,
    chunks: Vec<ChunkId>,
}

/// Model of a distributed file system.
///
/// Files are split into chunks of `chunk_size` bytes (the last one may be shorter), every chunk
/// is stored on some set of hosts.
pub struct DistributedFileSystem {
    chunk_size: u64,
    chunks_location: HashMap<ChunkId, BTreeSet<String>>,
    chunk_sizes: HashMap<ChunkId, u64>,
    files: BTreeMap<String, FileEntry>,
    host_info: BTreeMap<String, HostInfo>,
    next_chunk_id: ChunkId,
    reachable: bool,
}

impl DistributedFileSystem {
    /// Creates new [DistributedFileSystem] without files. Panics if `chunk_size` is zero.
    pub fn new(host_info: BTreeMap<String, HostInfo>, chunk_size: u64) -> Self {
        assert!(chunk_size > 0, "chunk size must be positive");
        Self {
            chunk_size,
            chunks_location: HashMap::new(),
            chunk_sizes: HashMap::new(),
            files: BTreeMap::new(),
            host_info,
            next_chunk_id: 0,
            reachable: true,
        }
    }

    /// Registers a file of `size` bytes.
    ///
    /// `replicas[i]` lists hosts storing the `i`-th chunk of the file, so its length must be equal
    /// to the number of chunks. Nothing is changed if an error is returned.
    pub fn add_file(&mut self, path: &str, size: u64, replicas: &[Vec<String>]) -> Result<(), LayoutError> {
        if self.files.contains_key(path) {
            return Err(LayoutError::FileExists { path: path.to_string() });
        }
        let chunks_count = size.div_ceil(self.chunk_size);
        if replicas.len() as u64 != chunks_count {
            return Err(LayoutError::ReplicaCountMismatch {
                path: path.to_string(),
                chunks: chunks_count,
                replicas: replicas.len(),
            });
        }

        let mut need_space: BTreeMap<&str, u64> = BTreeMap::new();
        let mut placements = Vec::with_capacity(replicas.len());
        for (index, hosts) in replicas.iter().enumerate() {
            let chunk_id = self.next_chunk_id + index as u64;
            let chunk_len = self.chunk_len(size, index as u64);
            let mut placed = BTreeSet::new();
            for host in hosts.iter() {
                if !self.host_info.contains_key(host) {
                    return Err(LayoutError::UnknownHost { host: host.clone() });
                }
                if !placed.insert(host.clone()) {
                    return Err(LayoutError::ChunkAlreadyExists {
                        host: host.clone(),
                        chunk_id,
                    });
                }
                *need_space.entry(host.as_str()).or_default() += chunk_len;
            }
            placements.push((chunk_id, chunk_len, placed));
        }
        for (&host, &need) in need_space.iter() {
            let free_space = self.host_info[host].free_space;
            if free_space < need {
                return Err(LayoutError::NotEnoughSpace {
                    host: host.to_string(),
                    free_space,
                    need_space: need,
                });
            }
        }

        debug!(
            "registering file {} of size {} as {} chunks starting from {}",
            path, size, chunks_count, self.next_chunk_id
        );
        let mut chunks = Vec::with_capacity(placements.len());
        for (chunk_id, chunk_len, hosts) in placements.into_iter() {
            for host in hosts.iter() {
                if let Some(info) = self.host_info.get_mut(host) {
                    info.free_space -= chunk_len;
                    info.chunks.insert(chunk_id);
                }
            }
            self.chunks_location.insert(chunk_id, hosts);
            self.chunk_sizes.insert(chunk_id, chunk_len);
            chunks.push(chunk_id);
        }
        self.next_chunk_id += chunks_count;
        self.files.insert(path.to_string(), FileEntry { size, chunks });
        Ok(())
    }

    /// Adds a replica of chunk `chunk_id` on host `dst`.
    pub fn copy_chunk(&mut self, chunk_id: ChunkId, dst: &str) -> Result<(), LayoutError> {
        let chunk_len = *self
            .chunk_sizes
            .get(&chunk_id)
            .ok_or(LayoutError::NoSuchChunk { chunk_id })?;
        let info = self
            .host_info
            .get_mut(dst)
            .ok_or_else(|| LayoutError::UnknownHost { host: dst.to_string() })?;
        if info.chunks.contains(&chunk_id) {
            return Err(LayoutError::ChunkAlreadyExists {
                host: dst.to_string(),
                chunk_id,
            });
        }
        if info.free_space < chunk_len {
            return Err(LayoutError::NotEnoughSpace {
                host: dst.to_string(),
                free_space: info.free_space,
                need_space: chunk_len,
            });
        }
        debug!("copying chunk {} to {}", chunk_id, dst);
        info.free_space -= chunk_len;
        info.chunks.insert(chunk_id);
        self.chunks_location.entry(chunk_id).or_default().insert(dst.to_string());
        Ok(())
    }

    /// Removes the replica of chunk `chunk_id` from `host`.
    pub fn erase_chunk_on_host(&mut self, chunk_id: ChunkId, host: &str) -> Result<(), LayoutError> {
        let info = self
            .host_info
            .get_mut(host)
            .ok_or_else(|| LayoutError::UnknownHost { host: host.to_string() })?;
        if !info.chunks.remove(&chunk_id) {
            return Err(LayoutError::NoSuchChunkOnHost {
                host: host.to_string(),
                chunk_id,
            });
        }
        debug!("erasing chunk {} from {}", chunk_id, host);
        info.free_space += self.chunk_sizes.get(&chunk_id).copied().unwrap_or_default();
        if let Some(locations) = self.chunks_location.get_mut(&chunk_id) {
            locations.remove(host);
        }
        Ok(())
    }

    /// Makes every [FileSystem] query fail with [FsError::Unreachable] while `reachable` is false.
    pub fn set_reachable(&mut self, reachable: bool) {
        self.reachable = reachable;
    }

    /// Returns chunk ids of chunks which file `path` was split into.
    pub fn file_chunks(&self, path: &str) -> Option<&Vec<ChunkId>> {
        self.files.get(path).map(|file| &file.chunks)
    }

    /// Returns locations of all chunk replicas.
    pub fn chunk_location(&self, chunk_id: ChunkId) -> Option<&BTreeSet<String>> {
        self.chunks_location.get(&chunk_id)
    }

    /// Map with info about all hosts in the system.
    pub fn hosts_info(&self) -> &BTreeMap<String, HostInfo> {
        &self.host_info
    }

    /// Chunk size.
    pub fn chunk_size(&self) -> u64 {
        self.chunk_size
    }

    fn chunk_len(&self, file_size: u64, index: u64) -> u64 {
        self.chunk_size.min(file_size - index * self.chunk_size)
    }
}

impl FileSystem for DistributedFileSystem {
    fn file_status(&self, path: &str) -> Result<FileStatus, FsError> {
        if !self.reachable {
            return Err(FsError::Unreachable);
        }
        let file = self
            .files
            .get(path)
            .ok_or_else(|| FsError::NotFound { path: path.to_string() })?;
        Ok(FileStatus {
            path: path.to_string(),
            len: file.size,
        })
    }

    fn block_locations(&self, status: &FileStatus, offset: u64, length: u64) -> Result<Vec<BlockLocation>, FsError> {
        if !self.reachable {
            return Err(FsError::Unreachable);
        }
        let file = self.files.get(&status.path).ok_or_else(|| FsError::NotFound {
            path: status.path.clone(),
        })?;
        if length == 0 || offset >= file.size {
            return Ok(Vec::new());
        }
        let end = offset.saturating_add(length).min(file.size);
        let first = offset / self.chunk_size;
        let last = (end - 1) / self.chunk_size;
        let locations = (first..=last)
            .map(|index| {
                let chunk_id = file.chunks[index as usize];
                BlockLocation::new(
                    index * self.chunk_size,
                    self.chunk_len(file.size, index),
                    self.chunks_location
                        .get(&chunk_id)
                        .map(|hosts| hosts.iter().cloned().collect())
                        .unwrap_or_default(),
                )
            })
            .collect::<Vec<_>>();
        debug!(
            "file {} range [{}, {}) covered by {} blocks",
            status.path,
            offset,
            end,
            locations.len()
        );
        Ok(locations)
    }
}
