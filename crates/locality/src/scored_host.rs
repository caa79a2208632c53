//! Host paired with the number of bytes it stores locally.

use std::cmp::Ordering;

use serde::Serialize;

/// Host with the number of bytes of the queried data stored on it.
///
/// Ordered so that hosts with more bytes come first, hosts with equal byte counts are ordered by
/// hostname.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScoredHost {
    pub hostname: String,
    pub bytes: u64,
}

impl ScoredHost {
    pub fn new(hostname: impl Into<String>, bytes: u64) -> Self {
        Self {
            hostname: hostname.into(),
            bytes,
        }
    }
}

impl Ord for ScoredHost {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .bytes
            .cmp(&self.bytes)
            .then_with(|| self.hostname.cmp(&other.hostname))
    }
}

impl PartialOrd for ScoredHost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
