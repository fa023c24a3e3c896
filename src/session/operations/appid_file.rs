//! steam_appid.txt generation

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use crate::paths::APPID_FILE;

/// Write the AppID as plain decimal text to `steam_appid.txt` in `dir`.
///
/// The Steam API reads this file from the working directory when the game
/// was not started by the Steam client.
pub fn write_appid_file(dir: &Path, app_id: u32) -> Result<PathBuf, Box<dyn Error>> {
    let path = dir.join(APPID_FILE);
    fs::write(&path, app_id.to_string())?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_plain_decimal() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_appid_file(dir.path(), 480).unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "480");
    }

    #[test]
    fn overwrites_previous_id() {
        let dir = tempfile::tempdir().unwrap();
        write_appid_file(dir.path(), 1234567).unwrap();
        let path = write_appid_file(dir.path(), 570).unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "570");
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(write_appid_file(&dir.path().join("gone"), 480).is_err());
    }
}
