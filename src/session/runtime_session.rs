use std::error::Error;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::activity_log::ActivityLog;
use crate::config::ConfigStore;
use crate::paths::{resolve_relative, APPID_FILE};
use crate::runtime::{NativeRuntime, SteamApi};

use super::operations::{spawn_game, write_appid_file};
use super::pipelines::resolve_steam_api;
use super::pure::split_arguments;
use super::types::{AppIdChange, LibrarySource, SessionState};

/// Owns the config, the activity log and the native runtime for one launch.
///
/// Dropping the session shuts down an active runtime.
pub struct RuntimeSession {
    config: ConfigStore,
    log: Arc<ActivityLog>,
    runtime: Box<dyn NativeRuntime>,
    state: SessionState,
    app_id: u32,
    steam_api_dll_path: String,
    game_executable: String,
    game_arguments: String,
    /// Where steam_appid.txt is written
    working_dir: PathBuf,
}

impl RuntimeSession {
    /// Open a session backed by the real Steam API
    pub fn open(config_path: impl Into<PathBuf>) -> Self {
        Self::with_runtime(config_path, Box::new(SteamApi::new()))
    }

    pub fn with_runtime(config_path: impl Into<PathBuf>, runtime: Box<dyn NativeRuntime>) -> Self {
        let config = ConfigStore::open(config_path);

        let config_dir = config
            .path()
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        let log_path = resolve_relative(&config_dir, &config.log_file());
        let log = Arc::new(ActivityLog::new(log_path, config.logging_enabled()));

        let session = Self {
            app_id: config.app_id(),
            steam_api_dll_path: config.steam_api_dll_path(),
            game_executable: config.game_executable(),
            game_arguments: config.game_arguments(),
            config,
            log,
            runtime,
            state: SessionState::Uninitialized,
            working_dir: PathBuf::from("."),
        };

        session.log.log(&format!(
            "uc-online initialized with AppID: {} (runtime: {})",
            session.app_id,
            session.runtime.name()
        ));
        session.log.log(&format!(
            "Game executable: {}",
            if session.game_executable.is_empty() {
                "not configured"
            } else {
                session.game_executable.as_str()
            }
        ));
        session.log.log(&format!(
            "Steam API library path: {}",
            if session.steam_api_dll_path.is_empty() {
                "default loading"
            } else {
                session.steam_api_dll_path.as_str()
            }
        ));

        session
    }

    /// Write steam_appid.txt somewhere other than the working directory
    pub fn set_working_dir(&mut self, dir: impl Into<PathBuf>) {
        self.working_dir = dir.into();
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_initialized(&self) -> bool {
        self.state == SessionState::Initialized
    }

    pub fn app_id(&self) -> u32 {
        self.app_id
    }

    pub fn game_executable(&self) -> &str {
        &self.game_executable
    }

    pub fn game_arguments(&self) -> &str {
        &self.game_arguments
    }

    pub fn steam_api_dll_path(&self) -> &str {
        &self.steam_api_dll_path
    }

    pub fn log(&self) -> &ActivityLog {
        &self.log
    }

    /// Handle to the activity log for use from other threads
    pub fn shared_log(&self) -> Arc<ActivityLog> {
        Arc::clone(&self.log)
    }

    /// Start the native runtime under the current AppID.
    ///
    /// The error is the runtime's diagnostic text; it has already been
    /// printed and logged.
    pub fn initialize(&mut self) -> Result<(), String> {
        if self.is_initialized() {
            self.log.log("Steam already initialized");
            return Ok(());
        }

        if self.app_id == 0 {
            self.log
                .log_warning("No AppID set in the config file. This likely will not work.");
            self.log.log_warning(
                "Set AppID in the config file; a default one is written if the file is missing.",
            );
            self.log.log_warning("Continuing without a set AppID.");
            self.log.log(&format!(
                "Skipping {} creation - no appid configured.",
                APPID_FILE
            ));
        } else {
            self.log
                .log(&format!("Initializing Steam with AppID: {}", self.app_id));
            self.create_appid_file();
        }

        let source = resolve_steam_api(&self.steam_api_dll_path, self.runtime.as_mut(), &self.log);

        match self.runtime.init() {
            Ok(()) => {
                self.state = SessionState::Initialized;
                self.log.log(&match source {
                    LibrarySource::Default => "Steam initialized successfully".to_string(),
                    LibrarySource::Custom(path) => format!(
                        "Steam initialized successfully using {}",
                        path.display()
                    ),
                });
                println!("[uc-online] Steam initialized with AppID {}", self.app_id);

                // Informational only; init already succeeded
                match self.runtime.verify_interfaces() {
                    Ok(()) => self.log.log("Steam interfaces accessible"),
                    Err(reason) => self
                        .log
                        .log_warning(&format!("Steam interfaces not accessible: {}", reason)),
                }
                Ok(())
            }
            Err(msg) => {
                println!("[uc-online] SteamAPI_Init failed: {}", msg);
                self.log.log_error(&format!("SteamAPI_Init failed: {}", msg));

                // The outcome stays a failure whatever the runtime decides here
                if self.runtime.restart_app_if_necessary(self.app_id) {
                    self.log
                        .log_warning("Steam requested a relaunch through the Steam client");
                }
                Err(msg)
            }
        }
    }

    fn create_appid_file(&self) {
        match write_appid_file(&self.working_dir, self.app_id) {
            Ok(path) => self.log.log(&format!(
                "Created {} with AppID: {}",
                path.display(),
                self.app_id
            )),
            Err(e) => println!(
                "[uc-online] Failed to create {}: {} (is the working directory writable?)",
                APPID_FILE, e
            ),
        }
    }

    pub fn shutdown(&mut self) {
        if !self.is_initialized() {
            return;
        }

        self.log.log("Shutting down Steam");
        self.runtime.shutdown();
        self.state = SessionState::Uninitialized;
        self.log.log("Steam shutdown complete");
    }

    /// Process runtime callbacks once. Callers pick the frequency.
    pub fn pump_callbacks(&mut self) {
        if self.is_initialized() {
            self.runtime.run_callbacks();
        }
    }

    /// Switch to another AppID, restarting the runtime if it is active
    pub fn set_app_id(&mut self, app_id: u32) -> AppIdChange {
        self.app_id = app_id;
        self.log.log(&format!("AppID changed to: {}", app_id));

        if !self.is_initialized() {
            return AppIdChange::Recorded;
        }

        self.log.log("Reinitializing Steam with new AppID");
        self.shutdown();
        match self.initialize() {
            Ok(()) => AppIdChange::Reinitialized,
            Err(reason) => {
                self.log.log_warning(&format!(
                    "Steam stays shut down after AppID change to {}",
                    app_id
                ));
                AppIdChange::ShutdownOnly(reason)
            }
        }
    }

    /// Launch the configured game and return its PID.
    ///
    /// The child is not tracked after spawning. Failures are logged and
    /// printed before being returned.
    pub fn launch_game(&self) -> Result<u32, Box<dyn Error>> {
        self.log
            .log(&format!("Attempting to launch game: {}", self.game_executable));

        let executable = self.game_executable.trim();
        if executable.is_empty() {
            let msg = "No game executable configured in config file";
            self.log.log_error(msg);
            println!("[uc-online] {}", msg);
            return Err(msg.into());
        }

        let path = Path::new(executable);
        if !path.exists() {
            let msg = format!("Game executable not found: {}", executable);
            self.log.log_error(&msg);
            println!("[uc-online] {}", msg);
            return Err(msg.into());
        }

        self.log.log(&format!(
            "Launching game: {} {}",
            executable, self.game_arguments
        ));
        println!(
            "[uc-online] Launching game: {} {}",
            executable, self.game_arguments
        );

        match spawn_game(path, &split_arguments(&self.game_arguments)) {
            Ok(child) => {
                let pid = child.id();
                self.log
                    .log(&format!("Game launched successfully (PID: {})", pid));
                println!("[uc-online] Game launched successfully (PID: {})", pid);
                Ok(pid)
            }
            Err(e) => {
                self.log.log_exception(&e, "Game launch failed");
                println!("[uc-online] Error launching game: {}", e);
                Err(e.into())
            }
        }
    }

    /// Set and persist the game executable
    pub fn set_game_executable(&mut self, path: &str) {
        self.game_executable = path.to_string();
        self.config.set_game_executable(path);
        self.persist_config();
    }

    /// Set and persist the game arguments
    pub fn set_game_arguments(&mut self, arguments: &str) {
        self.game_arguments = arguments.to_string();
        self.config.set_game_arguments(arguments);
        self.persist_config();
    }

    /// Set and persist the Steam API library directory
    pub fn set_steam_api_dll_path(&mut self, path: &str) {
        self.steam_api_dll_path = path.to_string();
        if let Err(e) = self.config.set_steam_api_dll_path(path) {
            self.report_save_error(&*e);
        }
    }

    /// Write the current AppID, executable and arguments to the config file
    pub fn save_config(&mut self) {
        self.config.set_app_id(self.app_id);
        self.config.set_game_executable(&self.game_executable);
        self.config.set_game_arguments(&self.game_arguments);
        self.persist_config();
    }

    /// Re-read the config file, discarding unsaved changes
    pub fn reload_config(&mut self) {
        self.config.load();
        self.app_id = self.config.app_id();
        self.game_executable = self.config.game_executable();
        self.game_arguments = self.config.game_arguments();
        self.steam_api_dll_path = self.config.steam_api_dll_path();
        self.log.log(&format!(
            "Configuration reloaded from {}",
            self.config.path().display()
        ));
    }

    fn persist_config(&self) {
        if let Err(e) = self.config.save() {
            self.report_save_error(&*e);
        }
    }

    fn report_save_error(&self, e: &dyn Error) {
        println!(
            "[uc-online] Error saving config {}: {}",
            self.config.path().display(),
            e
        );
        self.log.log_error(&format!("Error saving config: {}", e));
    }

    pub fn set_logging_enabled(&self, enabled: bool) {
        self.log.set_enabled(enabled);
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.log.is_enabled()
    }

    pub fn clear_log(&self) {
        self.log.clear_log();
    }
}

impl Drop for RuntimeSession {
    fn drop(&mut self) {
        self.log.log("uc-online shutting down");
        self.shutdown();
        self.state = SessionState::ShutDown;
    }
}
