//! Finds every shortest word ladder between two dictionary words.
//!
//! The dictionary is turned into a one-edit adjacency graph with wildcard
//! buckets ([`graph::WordGraph`]), then a breadth-first search that keeps all
//! shortest-path predecessors enumerates the ladders
//! ([`ladder::LadderExplorer`]).

pub mod app;
pub mod dictionary;
pub mod graph;
pub mod ladder;
pub mod report;
