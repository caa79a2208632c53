//! Summing block lengths per host.

use std::collections::HashMap;

use locality_dfs::block_location::BlockLocation;

/// Number of bytes stored on each host.
pub type HostByteTally = HashMap<String, u64>;

/// Sums lengths of all blocks each host holds a replica of.
///
/// Overlapping blocks are not deduplicated, every record contributes its full length. Totals
/// saturate at `u64::MAX`.
pub fn bytes_per_host(blocks: &[BlockLocation]) -> HostByteTally {
    let mut tally = HostByteTally::new();
    for block in blocks.iter() {
        for host in block.hosts.iter() {
            let bytes = tally.entry(host.clone()).or_default();
            *bytes = bytes.saturating_add(block.length);
        }
    }
    tally
}
