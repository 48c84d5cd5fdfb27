// word_graph.rs
// ──────────────────────────────────────────────────────────────────────────────
// One-edit adjacency graph over a dictionary. Nodes live in an arena indexed
// by `NodeId`; a map from normalized word to id gives lookups. Edges are
// derived with wildcard buckets (see `BucketKey`): every word is filed once
// per character position and all members of a bucket are pairwise adjacent.
// The graph is immutable once built. Per-query search state lives outside of
// it (see `ladder::SearchState`).
// ──────────────────────────────────────────────────────────────────────────────
use std::collections::HashMap;

use super::bucket::BucketKey;

/// Index of a node in the `WordGraph` arena.
pub type NodeId = usize;

/// A dictionary word and the ids of every word one edit away from it.
#[derive(Clone, Debug)]
pub struct WordNode {
    word: String,
    neighbors: Vec<NodeId>, // Sorted ascending, no duplicates
}

impl WordNode {
    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn neighbors(&self) -> &[NodeId] {
        &self.neighbors
    }
}

/// Adjacency graph where two words are connected iff they have the same
/// length and differ in exactly one character position.
#[derive(Clone, Debug, Default)]
pub struct WordGraph {
    nodes: Vec<WordNode>,
    index: HashMap<String, NodeId>,
    largest_bucket: Option<(BucketKey, usize)>,
    bucket_count: usize,
}

impl WordGraph {
    /// Builds the graph from a list of words.
    ///
    /// Words are lowercased; duplicates collapse to the node created for the
    /// first occurrence. Every distinct word gets a node, including words with
    /// no neighbors. Runs in O(total characters x average bucket size).
    pub fn build<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut graph = Self::default();
        for word in words {
            graph.intern(word.as_ref());
        }

        let mut buckets: HashMap<BucketKey, Vec<NodeId>> = HashMap::new();
        for (id, node) in graph.nodes.iter().enumerate() {
            for key in BucketKey::all_for_word(&node.word) {
                buckets.entry(key).or_default().push(id);
            }
        }

        for group in buckets.values() {
            for &from in group {
                for &to in group {
                    if from != to {
                        graph.add_edge(from, to);
                    }
                }
            }
        }

        // Distinct words share at most one bucket, so sorting is all that is
        // needed for a stable neighbor order.
        for node in &mut graph.nodes {
            node.neighbors.sort_unstable();
        }

        graph.bucket_count = buckets.len();
        graph.largest_bucket = buckets
            .into_iter()
            .map(|(key, group)| (key, group.len()))
            .max_by(|(key_a, len_a), (key_b, len_b)| {
                len_a
                    .cmp(len_b)
                    .then_with(|| key_b.to_string().cmp(&key_a.to_string()))
            });
        graph
    }

    /// Returns the node id for `word`, adding a new node if it is absent.
    fn intern(&mut self, word: &str) -> NodeId {
        let word = word.to_lowercase();
        if let Some(&id) = self.index.get(&word) {
            return id;
        }
        let id = self.nodes.len();
        self.nodes.push(WordNode {
            word: word.clone(),
            neighbors: Vec::new(),
        });
        self.index.insert(word, id);
        id
    }

    /// Adds a directed edge. Symmetry comes from the all-pairs bucket loop.
    fn add_edge(&mut self, from: NodeId, to: NodeId) {
        self.nodes[from].neighbors.push(to);
    }

    /// Returns the id of `word` (case-insensitive), if it is in the graph.
    pub fn get_node_id(&self, word: &str) -> Option<NodeId> {
        self.index.get(&word.to_lowercase()).copied()
    }

    /// Returns true if `word` (case-insensitive) is in the graph.
    pub fn contains(&self, word: &str) -> bool {
        self.get_node_id(word).is_some()
    }

    pub fn get_node(&self, id: NodeId) -> Option<&WordNode> {
        self.nodes.get(id)
    }

    pub fn get_word(&self, id: NodeId) -> Option<&str> {
        self.get_node(id).map(WordNode::word)
    }

    /// Returns the neighbors of `id`, or an empty slice for an unknown id.
    pub fn get_neighbors(&self, id: NodeId) -> &[NodeId] {
        self.get_node(id).map(WordNode::neighbors).unwrap_or(&[])
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|node| node.neighbors.len()).sum::<usize>() / 2
    }

    /// Number of non-empty wildcard buckets seen while building.
    pub fn bucket_count(&self) -> usize {
        self.bucket_count
    }

    /// The most populated bucket and its size. Ties go to the key that
    /// renders first alphabetically.
    pub fn largest_bucket(&self) -> Option<(&BucketKey, usize)> {
        self.largest_bucket.as_ref().map(|(key, len)| (key, *len))
    }
}
