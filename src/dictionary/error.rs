use thiserror::Error;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for dictionary loading operations.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// Error when reading the dictionary file.
    #[error("Failed to read dictionary '{0}': {1}")]
    ReadFile(String, std::io::Error),
}
