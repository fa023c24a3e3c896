//! Native runtime abstraction - the process-wide Steam API entry points
//!
//! The session never calls the Steam API directly; it goes through
//! `NativeRuntime` so the real library can be swapped for a recording fake.

use std::error::Error;
use std::path::Path;

mod steam_api;

pub use steam_api::SteamApi;

/// Entry points consumed from the online-services runtime
pub trait NativeRuntime {
    /// Runtime name for log messages
    fn name(&self) -> &str;

    /// Load the runtime library from an explicit file.
    /// On error the runtime falls back to the platform search path.
    fn load_library(&mut self, path: &Path) -> Result<(), Box<dyn Error>>;

    /// Start the runtime. The error carries the runtime's diagnostic text.
    fn init(&mut self) -> Result<(), String>;

    fn shutdown(&mut self);

    /// Process queued runtime callbacks once
    fn run_callbacks(&mut self);

    /// Ask the runtime whether the process must be relaunched through the
    /// client. May terminate or relaunch the process on its own.
    fn restart_app_if_necessary(&mut self, app_id: u32) -> bool;

    /// Check that the client interfaces are reachable after a successful
    /// `init`. The error names the first interface that is missing.
    fn verify_interfaces(&mut self) -> Result<(), String> {
        Ok(())
    }
}
