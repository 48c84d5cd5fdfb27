// error module
mod error;
// loader module
mod loader;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the dictionary modules.
//─────────────────────────────────────────────────────────────────────────────
pub use error::DictionaryError;
pub use loader::{load_words_from_file, parse_words};
