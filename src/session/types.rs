//! Session type definitions

use std::path::PathBuf;

/// Lifecycle of a RuntimeSession
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Uninitialized,
    Initialized,
    /// Reached only when the session is dropped
    ShutDown,
}

/// Outcome of changing the AppID on a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppIdChange {
    /// Runtime was not active; the new id applies on the next initialize
    Recorded,
    /// Runtime was shut down and started again under the new id
    Reinitialized,
    /// Runtime was shut down but failed to start again. The session is
    /// uninitialized with the new id already recorded.
    ShutdownOnly(String),
}

/// Where the Steam API library ended up being loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibrarySource {
    /// Platform search path
    Default,
    /// Explicit file under the configured directory
    Custom(PathBuf),
}
