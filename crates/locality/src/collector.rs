//! Collecting block locations of files from a filesystem.

use log::debug;

use locality_dfs::{
    block_location::BlockLocation,
    file_system::{FileSystem, FsError},
};

use crate::ranker::hosts_sorted_by_locality_for_blocks;

/// Number of hosts returned for a split when the caller doesn't choose one.
pub const DEFAULT_MAX_HOSTS_PER_SPLIT: usize = 3;

/// Returns locations of all blocks of all `files`, in the order of `files`.
pub fn collect_blocks<F, S>(files: &[S], fs: &F) -> Result<Vec<BlockLocation>, FsError>
where
    F: FileSystem + ?Sized,
    S: AsRef<str>,
{
    let mut all_locations = Vec::new();
    for file in files.iter() {
        let status = fs.file_status(file.as_ref())?;
        let locations = fs.block_locations(&status, 0, status.len)?;
        debug!("file {} of size {} has {} blocks", status.path, status.len, locations.len());
        all_locations.extend(locations);
    }
    Ok(all_locations)
}

/// Returns locations of blocks covering `[offset, offset + length)` of `file`.
pub fn collect_blocks_in_range<F>(file: &str, offset: u64, length: u64, fs: &F) -> Result<Vec<BlockLocation>, FsError>
where
    F: FileSystem + ?Sized,
{
    let status = fs.file_status(file)?;
    let locations = fs.block_locations(&status, offset, length)?;
    debug!(
        "file {} range [{}, {}) has {} blocks",
        status.path,
        offset,
        offset.saturating_add(length),
        locations.len()
    );
    Ok(locations)
}

/// Returns up to `max_hosts_per_split` hosts storing the most bytes of `files`.
pub fn hosts_sorted_by_locality<F, S>(files: &[S], fs: &F, max_hosts_per_split: usize) -> Result<Vec<String>, FsError>
where
    F: FileSystem + ?Sized,
    S: AsRef<str>,
{
    let blocks = collect_blocks(files, fs)?;
    Ok(hosts_sorted_by_locality_for_blocks(&blocks, max_hosts_per_split))
}

/// Returns up to `max_hosts_per_split` hosts storing the most bytes of blocks overlapping
/// `[offset, offset + length)` of `file`.
pub fn hosts_sorted_by_locality_in_range<F>(
    file: &str,
    offset: u64,
    length: u64,
    fs: &F,
    max_hosts_per_split: usize,
) -> Result<Vec<String>, FsError>
where
    F: FileSystem + ?Sized,
{
    let blocks = collect_blocks_in_range(file, offset, length, fs)?;
    Ok(hosts_sorted_by_locality_for_blocks(&blocks, max_hosts_per_split))
}
