use crate::graph::NodeId;

//─────────────────────────────────────────────────────────────────────────────

/// Breadth-first search state for a single query.
///
/// Distances and predecessor lists are indexed in parallel with the graph's
/// node arena. A fresh state is allocated for every query, so nothing carries
/// over from one search to the next.
#[derive(Clone, Debug)]
pub struct SearchState {
    origin: NodeId,
    distances: Vec<Option<usize>>, // None = unreached
    predecessors: Vec<Vec<NodeId>>,
}

impl SearchState {
    /// Creates a state for `node_count` nodes with only `origin` reached.
    pub(super) fn new(node_count: usize, origin: NodeId) -> Self {
        let mut distances = vec![None; node_count];
        distances[origin] = Some(0);
        Self {
            origin,
            distances,
            predecessors: vec![Vec::new(); node_count],
        }
    }

    /// Relaxes the edge `current -> neighbor`.
    ///
    /// An unreached neighbor gets distance `d(current) + 1` and `current` as
    /// its first predecessor. A neighbor already at exactly that distance gets
    /// `current` as an additional predecessor. Anything else is left alone.
    /// Returns true only when `neighbor` was reached for the first time and
    /// must be enqueued.
    pub(super) fn relax(&mut self, current: NodeId, neighbor: NodeId) -> bool {
        let Some(current_distance) = self.distance(current) else {
            return false;
        };
        let next = current_distance + 1;
        match self.distances[neighbor] {
            None => {
                self.distances[neighbor] = Some(next);
                self.predecessors[neighbor].push(current);
                true
            }
            Some(distance) if distance == next => {
                self.predecessors[neighbor].push(current);
                false
            }
            Some(_) => false,
        }
    }

    /// The node the search started from.
    pub fn origin(&self) -> NodeId {
        self.origin
    }

    /// Shortest distance from the origin, or `None` if `id` was not reached.
    pub fn distance(&self, id: NodeId) -> Option<usize> {
        self.distances.get(id).copied().flatten()
    }

    pub fn is_reached(&self, id: NodeId) -> bool {
        self.distance(id).is_some()
    }

    /// Every neighbor of `id` that lies one step closer to the origin on some
    /// shortest path, in the order they were discovered.
    pub fn predecessors(&self, id: NodeId) -> &[NodeId] {
        self.predecessors.get(id).map(Vec::as_slice).unwrap_or(&[])
    }
}
