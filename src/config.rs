//! INI-backed launcher configuration
//!
//! ## Module Structure
//! - `types.rs`: ConfigStore, Section and the well-known section/key names
//! - `pure/`: INI parsing and serialization (no I/O)
//! - `operations/`: Reading and writing the config file

pub mod operations;
pub mod pure;
pub mod types;

// Re-export types
pub use types::{
    ConfigStore, Section, APP_SECTION, DEFAULT_APP_ID, DEFAULT_LOG_FILE, LOGGING_SECTION,
};
