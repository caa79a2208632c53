#![doc = include_str!("../../../README.md")]

pub mod aggregator;
pub mod collector;
pub mod locality_ranker;
pub mod ranker;
pub mod report;
pub mod scored_host;
pub mod split;
