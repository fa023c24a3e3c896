//! Steam API library probe locations

use std::path::{Path, PathBuf};

use crate::paths::{STEAM_API_LIB, STEAM_API_SUBDIR};

/// A file location probed for the Steam API library
#[derive(Debug, Clone, PartialEq)]
pub struct LibraryCandidate {
    pub path: PathBuf,
    /// Human-readable location for log messages
    pub location: &'static str,
}

/// Probe locations under a configured directory, in the order they are tried:
/// the directory itself, then its `win64` subdirectory.
pub fn library_candidates(dir: &Path) -> [LibraryCandidate; 2] {
    [
        LibraryCandidate {
            path: dir.join(STEAM_API_LIB),
            location: "configured path",
        },
        LibraryCandidate {
            path: dir.join(STEAM_API_SUBDIR).join(STEAM_API_LIB),
            location: "win64 subdirectory",
        },
    ]
}
