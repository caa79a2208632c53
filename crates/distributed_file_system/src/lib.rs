//! Filesystem collaborator of the locality ranker.
//!
//! [FileSystem](file_system::FileSystem) is the interface the ranker queries for file status
//! and block locations. [DistributedFileSystem](dfs::DistributedFileSystem) is an in-memory
//! model of a chunked distributed filesystem implementing it.

pub mod block_location;
pub mod dfs;
pub mod file_system;
pub mod host_info;
pub mod layout;
