// presenter module
mod presenter;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the presenter module.
//─────────────────────────────────────────────────────────────────────────────
pub use presenter::render_outcome;
