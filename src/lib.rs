//! uc-online - Steam API launcher shim
//!
//! Reads `config.ini`, writes `steam_appid.txt`, initializes the Steam API
//! (optionally from a custom library directory) and launches the configured
//! game while keeping the runtime's callbacks pumped.

pub mod activity_log;
pub mod config;
pub mod paths;
pub mod runtime;
pub mod session;
