// bucket key module
mod bucket;
// word graph module
mod word_graph;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the graph modules.
//─────────────────────────────────────────────────────────────────────────────
pub use bucket::BucketKey;
pub use word_graph::{NodeId, WordGraph, WordNode};
