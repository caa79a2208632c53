//! Locality queries with a configured number of hosts per split.

use serde::{Deserialize, Serialize};

use locality_dfs::{
    block_location::BlockLocation,
    file_system::{FileSystem, FsError},
};

use crate::{
    aggregator::HostByteTally,
    collector::{hosts_sorted_by_locality, hosts_sorted_by_locality_in_range, DEFAULT_MAX_HOSTS_PER_SPLIT},
    ranker::{best_n_hosts, hosts_sorted_by_locality_for_blocks},
    split::{plan_splits, InputSplit},
};

fn default_max_hosts_per_split() -> usize {
    DEFAULT_MAX_HOSTS_PER_SPLIT
}

/// Answers locality queries returning at most `max_hosts_per_split` hosts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalityRanker {
    #[serde(default = "default_max_hosts_per_split")]
    pub max_hosts_per_split: usize,
}

impl LocalityRanker {
    pub fn new(max_hosts_per_split: usize) -> Self {
        Self { max_hosts_per_split }
    }

    /// See [hosts_sorted_by_locality].
    pub fn hosts_for_files<F, S>(&self, files: &[S], fs: &F) -> Result<Vec<String>, FsError>
    where
        F: FileSystem + ?Sized,
        S: AsRef<str>,
    {
        hosts_sorted_by_locality(files, fs, self.max_hosts_per_split)
    }

    /// See [hosts_sorted_by_locality_in_range].
    pub fn hosts_for_range<F>(&self, file: &str, offset: u64, length: u64, fs: &F) -> Result<Vec<String>, FsError>
    where
        F: FileSystem + ?Sized,
    {
        hosts_sorted_by_locality_in_range(file, offset, length, fs, self.max_hosts_per_split)
    }

    /// See [hosts_sorted_by_locality_for_blocks].
    pub fn hosts_for_blocks(&self, blocks: &[BlockLocation]) -> Vec<String> {
        hosts_sorted_by_locality_for_blocks(blocks, self.max_hosts_per_split)
    }

    /// See [best_n_hosts].
    pub fn best_hosts(&self, tally: &HostByteTally) -> Vec<String> {
        best_n_hosts(tally, self.max_hosts_per_split)
    }

    /// See [plan_splits].
    pub fn plan_splits<F, S>(&self, files: &[S], split_size: u64, fs: &F) -> Result<Vec<InputSplit>, FsError>
    where
        F: FileSystem + ?Sized,
        S: AsRef<str>,
    {
        plan_splits(files, split_size, fs, self.max_hosts_per_split)
    }
}

impl Default for LocalityRanker {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_HOSTS_PER_SPLIT)
    }
}
