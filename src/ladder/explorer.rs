// ──────────────────────────────────────────────────────────────────────────────
use std::collections::VecDeque;

use super::error::LadderError;
use super::state::SearchState;
use crate::graph::{NodeId, WordGraph};

/// A word ladder from start to target, both inclusive.
pub type Path = Vec<String>;

/// `LadderExplorer` finds every shortest word ladder in a `WordGraph`.
pub struct LadderExplorer;

impl LadderExplorer {
    /// Returns every minimum-length ladder from `start` to `target`.
    ///
    /// Each path holds `distance + 1` words and consecutive words differ in
    /// one position. The result is complete and free of duplicates. An empty
    /// vector means `target` is unreachable from `start`; when both are the
    /// same word the only ladder is `[start]`.
    ///
    /// # Errors
    /// Returns `LadderError::WordNotFound` if either word is not in the graph.
    pub fn all_shortest_paths(
        graph: &WordGraph,
        start: &str,
        target: &str,
    ) -> Result<Vec<Path>, LadderError> {
        let origin = Self::resolve(graph, start)?;
        let goal = Self::resolve(graph, target)?;

        let state = Self::breadth_first(graph, origin);
        if !state.is_reached(goal) {
            return Ok(Vec::new());
        }

        let mut all_paths: Vec<Path> = Vec::new();
        let mut path: Vec<NodeId> = Vec::with_capacity(state.distance(goal).unwrap_or(0) + 1);
        Self::backtrack(graph, &state, goal, &mut path, &mut all_paths);
        Ok(all_paths)
    }

    /// Returns the number of steps on a shortest ladder, or `None` if
    /// `target` cannot be reached.
    pub fn shortest_distance(
        graph: &WordGraph,
        start: &str,
        target: &str,
    ) -> Result<Option<usize>, LadderError> {
        let goal = Self::resolve(graph, target)?;
        let state = Self::search(graph, start)?;
        Ok(state.distance(goal))
    }

    /// Runs the breadth-first search from `start` and returns its state.
    pub fn search(graph: &WordGraph, start: &str) -> Result<SearchState, LadderError> {
        let origin = Self::resolve(graph, start)?;
        Ok(Self::breadth_first(graph, origin))
    }

    fn resolve(graph: &WordGraph, word: &str) -> Result<NodeId, LadderError> {
        graph
            .get_node_id(word)
            .ok_or_else(|| LadderError::WordNotFound(word.to_string()))
    }

    /// Layer-by-layer BFS. A node is enqueued once, the first time it is
    /// reached; later equal-distance arrivals only add predecessors.
    fn breadth_first(graph: &WordGraph, origin: NodeId) -> SearchState {
        let mut state = SearchState::new(graph.len(), origin);
        let mut queue: VecDeque<NodeId> = VecDeque::new();
        queue.push_back(origin);

        while let Some(current) = queue.pop_front() {
            for &neighbor in graph.get_neighbors(current) {
                if state.relax(current, neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }
        state
    }

    /// Walks predecessor links from `current` back to the origin.
    ///
    /// `path` is shared across sibling branches: the current node is pushed on
    /// entry and popped on exit. It holds the ladder in reverse, so completed
    /// ladders are reversed when emitted.
    fn backtrack(
        graph: &WordGraph,
        state: &SearchState,
        current: NodeId,
        path: &mut Vec<NodeId>,
        all_paths: &mut Vec<Path>,
    ) {
        path.push(current);
        if current == state.origin() {
            all_paths.push(
                path.iter()
                    .rev()
                    .filter_map(|&id| graph.get_word(id))
                    .map(str::to_string)
                    .collect(),
            );
        } else {
            for &predecessor in state.predecessors(current) {
                Self::backtrack(graph, state, predecessor, path, all_paths);
            }
        }
        path.pop();
    }
}
