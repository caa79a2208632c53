//! Ranking hosts by the amount of local data.

use itertools::Itertools;
use log::debug;

use locality_dfs::block_location::BlockLocation;

use crate::{
    aggregator::{bytes_per_host, HostByteTally},
    scored_host::ScoredHost,
};

/// Returns all hosts of the tally ordered by [ScoredHost] ordering.
pub fn scored_hosts(tally: &HostByteTally) -> Vec<ScoredHost> {
    tally
        .iter()
        .map(|(hostname, &bytes)| ScoredHost::new(hostname.as_str(), bytes))
        .sorted()
        .collect()
}

/// Returns up to `max_hosts_per_split` hostnames with the most bytes, best first.
/// Ties are broken by hostname, so the result doesn't depend on the tally iteration order.
pub fn best_n_hosts(tally: &HostByteTally, max_hosts_per_split: usize) -> Vec<String> {
    let hosts = scored_hosts(tally)
        .into_iter()
        .take(max_hosts_per_split)
        .map(|host| host.hostname)
        .collect::<Vec<_>>();
    debug!("picked {:?} out of {} hosts", hosts, tally.len());
    hosts
}

/// Returns the number of bytes on the best host, or 0 for an empty tally.
pub fn bytes_on_best_host(tally: &HostByteTally) -> u64 {
    tally
        .iter()
        .map(|(hostname, &bytes)| ScoredHost::new(hostname.as_str(), bytes))
        .min()
        .map(|host| host.bytes)
        .unwrap_or(0)
}

/// Aggregates `blocks` per host and returns the best `max_hosts_per_split` hosts.
pub fn hosts_sorted_by_locality_for_blocks(blocks: &[BlockLocation], max_hosts_per_split: usize) -> Vec<String> {
    best_n_hosts(&bytes_per_host(blocks), max_hosts_per_split)
}
