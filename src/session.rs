//! Runtime session - Steam API lifecycle and game launch
//!
//! This module provides:
//! - Native runtime initialization, callback pumping and shutdown
//! - Steam API library resolution from a configured directory
//! - AppID hot-reconfiguration with full re-initialization
//! - Fire-and-forget game process launch
//!
//! ## Module Structure
//! - `types.rs`: SessionState, AppIdChange, LibrarySource
//! - `pure/`: Pure functions (argument splitting, library candidates)
//! - `operations/`: Atomic side effects (appid file, library scan, spawn)
//! - `pipelines/`: Multi-step orchestration (library resolution)
//! - `runtime_session.rs`: The session itself

mod operations;
mod pipelines;
mod pure;
mod runtime_session;
mod types;

pub use runtime_session::RuntimeSession;
pub use types::{AppIdChange, LibrarySource, SessionState};
