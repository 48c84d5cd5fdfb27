use thiserror::Error;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for word ladder searches.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LadderError {
    /// Error when a start or target word has no node in the graph.
    #[error("Word '{0}' is not in the dictionary")]
    WordNotFound(String),
}
