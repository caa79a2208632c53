//! Cutting files into splits annotated with their preferred hosts.

use log::debug;
use serde::Serialize;

use locality_dfs::file_system::{FileSystem, FsError};

use crate::ranker::hosts_sorted_by_locality_for_blocks;

/// Contiguous byte range of a file processed by one task.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InputSplit {
    pub path: String,
    pub offset: u64,
    pub length: u64,
    /// Hosts storing the most bytes of the split, best first.
    pub hosts: Vec<String>,
}

/// Cuts every file into consecutive splits of `split_size` bytes (the last split of a file may be
/// shorter) and attaches up to `max_hosts_per_split` preferred hosts to each split.
///
/// Empty files produce no splits. A zero `split_size` makes one split per file.
pub fn plan_splits<F, S>(
    files: &[S],
    split_size: u64,
    fs: &F,
    max_hosts_per_split: usize,
) -> Result<Vec<InputSplit>, FsError>
where
    F: FileSystem + ?Sized,
    S: AsRef<str>,
{
    let mut splits = Vec::new();
    for file in files.iter() {
        let status = fs.file_status(file.as_ref())?;
        let split_size = if split_size == 0 { status.len } else { split_size };
        let mut offset = 0;
        while offset < status.len {
            let length = split_size.min(status.len - offset);
            let blocks = fs.block_locations(&status, offset, length)?;
            splits.push(InputSplit {
                path: status.path.clone(),
                offset,
                length,
                hosts: hosts_sorted_by_locality_for_blocks(&blocks, max_hosts_per_split),
            });
            offset += length;
        }
    }
    debug!("planned {} splits over {} files", splits.len(), files.len());
    Ok(splits)
}
