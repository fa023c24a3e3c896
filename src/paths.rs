use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Config file used when no `--config` argument is given
pub const DEFAULT_CONFIG_FILE: &str = "config.ini";

/// File the Steam API reads the app id from, relative to the working directory
pub const APPID_FILE: &str = "steam_appid.txt";

/// Steam API library file name for the current platform
pub const STEAM_API_LIB: &str = "libsteam_api.so";

/// Subdirectory probed when the library is not directly inside the configured path
pub const STEAM_API_SUBDIR: &str = "win64";

/// Directory holding the running executable, falling back to the working directory
pub static PATH_EXE_DIR: LazyLock<PathBuf> = LazyLock::new(|| {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
});

/// Resolve `path` against `base` unless it is already absolute.
///
/// An empty `base` (e.g. the parent of a bare `config.ini`) leaves the path
/// relative to the working directory.
pub fn resolve_relative(base: &Path, path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() || base.as_os_str().is_empty() {
        return path.to_path_buf();
    }
    base.join(path)
}

/// Resolve a path relative to the directory of the running executable
pub fn resolve_relative_to_executable(path: &str) -> PathBuf {
    resolve_relative(&PATH_EXE_DIR, path)
}

/// Pick the config file when none was given on the command line.
///
/// A `config.ini` in the working directory wins, then one next to the
/// executable. Otherwise the working-directory path is returned and the
/// default file gets created there on load.
pub fn locate_config() -> PathBuf {
    let local = PathBuf::from(DEFAULT_CONFIG_FILE);
    if local.exists() {
        return local;
    }
    let beside_exe = resolve_relative_to_executable(DEFAULT_CONFIG_FILE);
    if beside_exe.exists() {
        return beside_exe;
    }
    local
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_path_is_kept() {
        let resolved = resolve_relative(Path::new("/etc/uc-online"), "/var/log/uc.log");
        assert_eq!(resolved, PathBuf::from("/var/log/uc.log"));
    }

    #[test]
    fn relative_path_joins_base() {
        let resolved = resolve_relative(Path::new("/games/spacewar"), "uc-online.log");
        assert_eq!(resolved, PathBuf::from("/games/spacewar/uc-online.log"));
    }

    #[test]
    fn empty_base_keeps_working_directory() {
        let resolved = resolve_relative(Path::new(""), "uc-online.log");
        assert_eq!(resolved, PathBuf::from("uc-online.log"));
    }

    #[test]
    fn executable_relative_keeps_file_name() {
        let resolved = resolve_relative_to_executable("config.ini");
        assert!(resolved.ends_with("config.ini"));
    }
}
