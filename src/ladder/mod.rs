// error module
mod error;
// explorer module
mod explorer;
// search state module
mod state;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the ladder modules.
//─────────────────────────────────────────────────────────────────────────────
pub use error::LadderError;
pub use explorer::{LadderExplorer, Path};
pub use state::SearchState;
