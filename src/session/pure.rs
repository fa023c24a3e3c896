//! Pure functions for the session
//!
//! These functions have no side effects and are deterministic.

mod arguments;
mod candidates;

pub use arguments::split_arguments;
pub use candidates::library_candidates;
