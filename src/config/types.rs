use crate::config::operations::{read_sections, write_default, write_sections};
use crate::config::pure::{parse_ini, section_index, DEFAULT_CONFIG};

use std::error::Error;
use std::path::{Path, PathBuf};

/// Section holding the launcher settings
pub const APP_SECTION: &str = "uc-online";
/// Section holding the activity log settings
pub const LOGGING_SECTION: &str = "Logging";

/// Spacewar, Valve's public test app
pub const DEFAULT_APP_ID: u32 = 480;
pub const DEFAULT_LOG_FILE: &str = "uc-online.log";

const KEY_APP_ID: &str = "AppID";
const KEY_GAME_EXECUTABLE: &str = "GameExecutable";
const KEY_GAME_ARGUMENTS: &str = "GameArguments";
const KEY_STEAM_API_DLL_PATH: &str = "SteamApiDllPath";
const KEY_ENABLE_LOGGING: &str = "EnableLogging";
const KEY_LOG_FILE: &str = "LogFile";

/// One `[name]` block of the config file.
///
/// Names and keys compare case-insensitively; the spelling that was stored
/// first is the one written back.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Section {
    pub name: String,
    pub entries: Vec<(String, String)>,
}

impl Section {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            entries: Vec::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    pub fn set(&mut self, key: &str, value: &str) {
        match self
            .entries
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
        {
            Some((_, v)) => *v = value.to_string(),
            None => self.entries.push((key.to_string(), value.to_string())),
        }
    }
}

/// Two-level section → key → value store backed by an INI file
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
    sections: Vec<Section>,
}

impl ConfigStore {
    /// Open the config at `path`, creating the default file if it is missing
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let mut store = Self {
            path: path.into(),
            sections: Vec::new(),
        };
        store.load();
        store
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Reload from disk, replacing everything held in memory.
    ///
    /// Never fails: a missing or unreadable file is replaced by the defaults.
    /// Undecodable bytes are not a read error and never reset the file.
    pub fn load(&mut self) {
        self.sections.clear();

        if !self.path.exists() {
            self.load_defaults();
            return;
        }

        match read_sections(&self.path) {
            Ok(sections) => self.sections = sections,
            Err(e) => {
                println!(
                    "[uc-online] Error loading config {}: {}",
                    self.path.display(),
                    e
                );
                self.load_defaults();
            }
        }
    }

    fn load_defaults(&mut self) {
        if let Err(e) = write_default(&self.path) {
            println!(
                "[uc-online] Error creating default config {}: {}",
                self.path.display(),
                e
            );
        }
        self.sections = parse_ini(DEFAULT_CONFIG);
    }

    /// Write every section back to the config file
    pub fn save(&self) -> Result<(), Box<dyn Error>> {
        write_sections(&self.path, &self.sections)
    }

    fn section(&self, name: &str) -> Option<&Section> {
        self.sections
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
    }

    pub fn get_value(&self, section: &str, key: &str, default: &str) -> String {
        self.section(section)
            .and_then(|s| s.get(key))
            .unwrap_or(default)
            .to_string()
    }

    /// Set a value in memory, creating the section if needed
    pub fn set_value(&mut self, section: &str, key: &str, value: &str) {
        let idx = section_index(&mut self.sections, section);
        self.sections[idx].set(key, value);
    }

    pub fn app_id(&self) -> u32 {
        self.get_value(APP_SECTION, KEY_APP_ID, "")
            .parse()
            .unwrap_or(DEFAULT_APP_ID)
    }

    pub fn set_app_id(&mut self, app_id: u32) {
        self.set_value(APP_SECTION, KEY_APP_ID, &app_id.to_string());
    }

    pub fn game_executable(&self) -> String {
        self.get_value(APP_SECTION, KEY_GAME_EXECUTABLE, "")
    }

    pub fn set_game_executable(&mut self, path: &str) {
        self.set_value(APP_SECTION, KEY_GAME_EXECUTABLE, path);
    }

    pub fn game_arguments(&self) -> String {
        self.get_value(APP_SECTION, KEY_GAME_ARGUMENTS, "")
    }

    pub fn set_game_arguments(&mut self, arguments: &str) {
        self.set_value(APP_SECTION, KEY_GAME_ARGUMENTS, arguments);
    }

    pub fn steam_api_dll_path(&self) -> String {
        self.get_value(APP_SECTION, KEY_STEAM_API_DLL_PATH, "")
    }

    /// Set the library directory and save immediately.
    ///
    /// Unlike the other setters this one persists on its own; existing config
    /// files depend on the path surviving without an explicit save. The value
    /// is kept in memory even when the save fails.
    pub fn set_steam_api_dll_path(&mut self, path: &str) -> Result<(), Box<dyn Error>> {
        self.set_value(APP_SECTION, KEY_STEAM_API_DLL_PATH, path);
        self.save()
    }

    pub fn logging_enabled(&self) -> bool {
        self.get_value(LOGGING_SECTION, KEY_ENABLE_LOGGING, "true")
            .eq_ignore_ascii_case("true")
    }

    pub fn log_file(&self) -> String {
        self.get_value(LOGGING_SECTION, KEY_LOG_FILE, DEFAULT_LOG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn missing_file_creates_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");

        let store = ConfigStore::open(&path);

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("AppID = 480"));
        assert!(written.contains("[Logging]"));
        assert_eq!(store.app_id(), 480);
        assert!(store.logging_enabled());
        assert_eq!(store.log_file(), "uc-online.log");
    }

    #[test]
    fn unwritable_location_still_has_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("config.ini");

        let store = ConfigStore::open(&path);

        assert!(!path.exists());
        assert_eq!(store.app_id(), DEFAULT_APP_ID);
        assert_eq!(store.game_executable(), "");
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");

        let mut store = ConfigStore::open(&path);
        store.set_app_id(570);
        store.set_game_executable("/games/dota/dota2");
        store.set_game_arguments("-novid -console");
        store.set_value("Extra", "Key", "value with spaces");
        store.save().unwrap();

        let reloaded = ConfigStore::open(&path);
        assert_eq!(reloaded.app_id(), 570);
        assert_eq!(reloaded.game_executable(), "/games/dota/dota2");
        assert_eq!(reloaded.game_arguments(), "-novid -console");
        assert_eq!(reloaded.get_value("Extra", "Key", ""), "value with spaces");
        assert_eq!(reloaded.log_file(), "uc-online.log");
    }

    #[test]
    fn lookups_ignore_case() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = ConfigStore::open(dir.path().join("config.ini"));

        store.set_value("MySection", "MyKey", "1");
        assert_eq!(store.get_value("mysection", "MYKEY", ""), "1");

        store.set_value("MYSECTION", "mykey", "2");
        assert_eq!(store.get_value("MySection", "MyKey", ""), "2");
        let section = store
            .sections()
            .iter()
            .find(|s| s.name == "MySection")
            .unwrap();
        assert_eq!(section.entries, vec![("MyKey".to_string(), "2".to_string())]);
    }

    #[test]
    fn absent_values_return_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::open(dir.path().join("config.ini"));

        assert_eq!(store.get_value("nope", "AppID", "fallback"), "fallback");
        assert_eq!(store.get_value(APP_SECTION, "nope", ""), "");
    }

    #[test]
    fn unparsable_app_id_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");
        fs::write(&path, "[uc-online]\nAppID = spacewar\n").unwrap();

        let store = ConfigStore::open(&path);
        assert_eq!(store.app_id(), 480);
    }

    #[test]
    fn logging_flag_parsing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");

        fs::write(&path, "[Logging]\nEnableLogging = TRUE\n").unwrap();
        assert!(ConfigStore::open(&path).logging_enabled());

        fs::write(&path, "[Logging]\nEnableLogging = no\n").unwrap();
        assert!(!ConfigStore::open(&path).logging_enabled());
    }

    #[test]
    fn only_library_path_setter_saves() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");

        let mut store = ConfigStore::open(&path);
        store.set_game_executable("/games/a.out");
        assert!(!fs::read_to_string(&path).unwrap().contains("/games/a.out"));

        store.set_steam_api_dll_path("/opt/steamworks").unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("SteamApiDllPath = /opt/steamworks"));
        assert!(written.contains("/games/a.out"));
    }

    #[test]
    fn invalid_utf8_keeps_settings_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");
        let original: &[u8] = b"[uc-online]\nAppID = 570\nGameExecutable = /g/\xff\xfe\n";
        fs::write(&path, original).unwrap();

        let store = ConfigStore::open(&path);

        assert_eq!(store.app_id(), 570);
        assert!(store.game_executable().starts_with("/g/"));
        assert_eq!(fs::read(&path).unwrap(), original);
    }

    #[test]
    fn unreadable_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");
        fs::create_dir(&path).unwrap();

        let store = ConfigStore::open(&path);

        assert!(path.is_dir());
        assert_eq!(store.app_id(), DEFAULT_APP_ID);
        assert!(store.logging_enabled());
    }

    #[test]
    fn failed_library_path_save_keeps_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");
        fs::create_dir(&path).unwrap();

        let mut store = ConfigStore::open(&path);

        assert!(store.set_steam_api_dll_path("/opt/steamworks").is_err());
        assert_eq!(store.steam_api_dll_path(), "/opt/steamworks");
    }

    #[test]
    fn load_discards_unsaved_changes() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = ConfigStore::open(dir.path().join("config.ini"));

        store.set_app_id(10);
        store.load();
        assert_eq!(store.app_id(), 480);
    }
}
