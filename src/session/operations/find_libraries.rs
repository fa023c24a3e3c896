//! Steam API library discovery
//!
//! Used only as a hint when the configured directory does not hold the
//! library where it is expected.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::paths::STEAM_API_LIB;

/// How deep below the configured directory to look
const MAX_SEARCH_DEPTH: usize = 4;

/// Find Steam API libraries anywhere below `dir`
pub fn find_steam_api_libraries(dir: &Path) -> Vec<PathBuf> {
    let mut found: Vec<PathBuf> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(MAX_SEARCH_DEPTH)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.file_name()
                .to_str()
                .is_some_and(|name| name.eq_ignore_ascii_case(STEAM_API_LIB))
        })
        .map(|e| e.into_path())
        .collect();
    found.sort();
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn finds_nested_libraries() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("bin/linux64");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join(STEAM_API_LIB), b"").unwrap();
        fs::write(dir.path().join("bin/readme.txt"), b"").unwrap();

        let found = find_steam_api_libraries(dir.path());
        assert_eq!(found, vec![nested.join(STEAM_API_LIB)]);
    }

    #[test]
    fn missing_directory_finds_nothing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_steam_api_libraries(&dir.path().join("gone")).is_empty());
    }
}
