//! Steam API library resolution
//!
//! Probes the configured directory, then its `win64` subdirectory, and falls
//! back to the platform's default library search. Every outcome is logged;
//! nothing here fails.

use std::path::Path;

use crate::activity_log::ActivityLog;
use crate::paths::STEAM_API_LIB;
use crate::runtime::NativeRuntime;

use super::super::operations::find_steam_api_libraries;
use super::super::pure::library_candidates;
use super::super::types::LibrarySource;

/// Load the Steam API library from `dll_path` if possible
pub fn resolve_steam_api(
    dll_path: &str,
    runtime: &mut dyn NativeRuntime,
    log: &ActivityLog,
) -> LibrarySource {
    let dll_path = dll_path.trim();
    if dll_path.is_empty() {
        log.log(&format!(
            "No custom {} path configured, using default loading",
            STEAM_API_LIB
        ));
        return LibrarySource::Default;
    }

    let dir = Path::new(dll_path);
    let candidates = library_candidates(dir);

    for candidate in &candidates {
        if !candidate.path.exists() {
            log.log(&format!(
                "{} not present at: {}",
                STEAM_API_LIB,
                candidate.path.display()
            ));
            continue;
        }

        log.log(&format!(
            "Found {} at: {}",
            STEAM_API_LIB,
            candidate.path.display()
        ));

        match runtime.load_library(&candidate.path) {
            Ok(()) => {
                log.log(&format!(
                    "Successfully loaded {} from {}",
                    STEAM_API_LIB, candidate.location
                ));
                return LibrarySource::Custom(candidate.path.clone());
            }
            Err(e) => {
                log.log_warning(&format!(
                    "Failed to load {} from {}: {}",
                    STEAM_API_LIB, candidate.location, e
                ));
            }
        }
    }

    log.log_warning(&format!(
        "{} not loaded from configured path, using default loading",
        STEAM_API_LIB
    ));

    for found in find_steam_api_libraries(dir) {
        if candidates.iter().any(|c| c.path == found) {
            continue;
        }
        log.log_warning(&format!(
            "Found {} deeper below configured path: {}",
            STEAM_API_LIB,
            found.display()
        ));
    }

    LibrarySource::Default
}
