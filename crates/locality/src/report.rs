//! Summary of a locality query for printing.

use serde::Serialize;

use crate::{
    aggregator::HostByteTally,
    ranker::{bytes_on_best_host, scored_hosts},
    scored_host::ScoredHost,
};

/// Best hosts of a tally together with their byte counts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HostsReport {
    /// Up to `max_hosts` best hosts, best first.
    pub hosts: Vec<ScoredHost>,
    /// Bytes on the best host of the whole tally, independent of `max_hosts`.
    pub bytes_on_best_host: u64,
}

impl HostsReport {
    pub fn new(tally: &HostByteTally, max_hosts: usize) -> Self {
        Self {
            hosts: scored_hosts(tally).into_iter().take(max_hosts).collect(),
            bytes_on_best_host: bytes_on_best_host(tally),
        }
    }
}
