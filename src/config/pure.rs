//! Pure functions for config handling
//!
//! These functions have no side effects and are deterministic.

mod ini;

pub use ini::{parse_ini, section_index, serialize_ini, DEFAULT_CONFIG};
