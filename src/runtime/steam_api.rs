//! Steam API bound through the dynamic loader
//!
//! Symbols are resolved with `dlsym` from the library opened by
//! `load_library`, or from `libsteam_api.so` on the default search path when
//! no explicit file was loaded. A successful reload releases the previous
//! handle; the last one stays mapped for the life of the process.

use std::error::Error;
use std::ffi::{c_char, c_int, c_void, CStr, CString};
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use crate::paths::STEAM_API_LIB;

use super::NativeRuntime;

type InitFlatFn = unsafe extern "C" fn(*mut c_char) -> c_int;
type InitFn = unsafe extern "C" fn() -> bool;
type VoidFn = unsafe extern "C" fn();
type RestartFn = unsafe extern "C" fn(u32) -> bool;
type InterfaceFn = unsafe extern "C" fn() -> *mut c_void;
type PipeFn = unsafe extern "C" fn() -> i32;

/// Flat accessors for ISteamApps, newest first
const STEAM_APPS_ACCESSORS: [&CStr; 3] = [
    c"SteamAPI_SteamApps_v008",
    c"SteamAPI_SteamApps_v007",
    c"SteamApps",
];

/// Size of the SteamErrMsg buffer filled by SteamAPI_InitFlat
const ERR_MSG_LEN: usize = 1024;

/// k_ESteamAPIInitResult_OK
const INIT_RESULT_OK: c_int = 0;

pub struct SteamApi {
    handle: *mut c_void,
}

impl SteamApi {
    pub fn new() -> Self {
        Self {
            handle: std::ptr::null_mut(),
        }
    }

    fn open(path: &CStr) -> Result<*mut c_void, String> {
        let handle = unsafe { libc::dlopen(path.as_ptr(), libc::RTLD_NOW | libc::RTLD_GLOBAL) };
        if handle.is_null() {
            return Err(last_dl_error());
        }
        Ok(handle)
    }

    /// Library handle, opening the default library on first use
    fn handle(&mut self) -> Result<*mut c_void, String> {
        if self.handle.is_null() {
            let name = CString::new(STEAM_API_LIB).map_err(|e| e.to_string())?;
            self.handle = Self::open(&name)
                .map_err(|e| format!("Failed to load {}: {}", STEAM_API_LIB, e))?;
        }
        Ok(self.handle)
    }

    /// Resolve an exported function. `F` must be the fn pointer type matching
    /// the export's C signature.
    fn symbol<F: Copy>(&mut self, name: &CStr) -> Option<F> {
        let handle = self.handle().ok()?;
        let sym = unsafe { libc::dlsym(handle, name.as_ptr()) };
        if sym.is_null() {
            return None;
        }
        Some(unsafe { std::mem::transmute_copy::<*mut c_void, F>(&sym) })
    }
}

impl Default for SteamApi {
    fn default() -> Self {
        Self::new()
    }
}

impl NativeRuntime for SteamApi {
    fn name(&self) -> &str {
        "steam_api"
    }

    fn load_library(&mut self, path: &Path) -> Result<(), Box<dyn Error>> {
        let c_path = CString::new(path.as_os_str().as_bytes())?;
        let handle = Self::open(&c_path)?;
        let previous = std::mem::replace(&mut self.handle, handle);
        if !previous.is_null() {
            // Every dlopen holds its own reference, even for the same file
            unsafe { libc::dlclose(previous) };
        }
        Ok(())
    }

    fn init(&mut self) -> Result<(), String> {
        self.handle()?;

        // Newer SDKs report the failure reason through InitFlat
        if let Some(init_flat) = self.symbol::<InitFlatFn>(c"SteamAPI_InitFlat") {
            let mut err_msg = [0 as c_char; ERR_MSG_LEN];
            let result = unsafe { init_flat(err_msg.as_mut_ptr()) };
            if result == INIT_RESULT_OK {
                return Ok(());
            }
            err_msg[ERR_MSG_LEN - 1] = 0;
            let text = unsafe { CStr::from_ptr(err_msg.as_ptr()) }
                .to_string_lossy()
                .into_owned();
            if text.is_empty() {
                return Err(format!("SteamAPI_InitFlat returned {}", result));
            }
            return Err(text);
        }

        match self.symbol::<InitFn>(c"SteamAPI_Init") {
            Some(init) => {
                if unsafe { init() } {
                    Ok(())
                } else {
                    Err("SteamAPI_Init returned false".to_string())
                }
            }
            None => Err(format!("SteamAPI_Init not exported by {}", STEAM_API_LIB)),
        }
    }

    fn shutdown(&mut self) {
        if let Some(shutdown) = self.symbol::<VoidFn>(c"SteamAPI_Shutdown") {
            unsafe { shutdown() };
        }
    }

    fn run_callbacks(&mut self) {
        if let Some(run_callbacks) = self.symbol::<VoidFn>(c"SteamAPI_RunCallbacks") {
            unsafe { run_callbacks() };
        }
    }

    fn restart_app_if_necessary(&mut self, app_id: u32) -> bool {
        match self.symbol::<RestartFn>(c"SteamAPI_RestartAppIfNecessary") {
            Some(restart) => unsafe { restart(app_id) },
            None => false,
        }
    }

    fn verify_interfaces(&mut self) -> Result<(), String> {
        if let Some(client) = self.symbol::<InterfaceFn>(c"SteamClient") {
            if unsafe { client() }.is_null() {
                return Err("Failed to get SteamClient".to_string());
            }
        }

        if let Some(pipe) = self.symbol::<PipeFn>(c"SteamAPI_GetHSteamPipe") {
            if unsafe { pipe() } == 0 {
                return Err("Failed to get HSteamPipe".to_string());
            }
        }

        let apps = STEAM_APPS_ACCESSORS
            .iter()
            .find_map(|name| self.symbol::<InterfaceFn>(name));
        match apps {
            Some(apps) if unsafe { apps() }.is_null() => {
                Err("SteamApps interface not available".to_string())
            }
            Some(_) => Ok(()),
            None => Err(format!("No SteamApps accessor exported by {}", STEAM_API_LIB)),
        }
    }
}

fn last_dl_error() -> String {
    let err = unsafe { libc::dlerror() };
    if err.is_null() {
        return "unknown dynamic loader error".to_string();
    }
    unsafe { CStr::from_ptr(err) }
        .to_string_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut api = SteamApi::new();

        let result = api.load_library(&dir.path().join(STEAM_API_LIB));
        assert!(result.is_err());
        assert!(api.handle.is_null());
    }

    #[test]
    fn loading_non_library_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STEAM_API_LIB);
        std::fs::write(&path, b"not an ELF object").unwrap();

        let mut api = SteamApi::new();
        assert!(api.load_library(&path).is_err());
    }

    #[test]
    fn reload_replaces_handle_and_failed_reload_keeps_it() {
        // Any library already mapped into the test process will do
        let mut api = SteamApi::new();
        if api.load_library(Path::new("libc.so.6")).is_err() {
            return;
        }
        let first = api.handle;

        api.load_library(Path::new("libc.so.6")).unwrap();
        assert_eq!(api.handle, first);

        let dir = tempfile::tempdir().unwrap();
        assert!(api.load_library(&dir.path().join(STEAM_API_LIB)).is_err());
        assert_eq!(api.handle, first);
    }

    #[test]
    fn path_with_nul_byte_is_rejected() {
        let mut api = SteamApi::new();
        assert!(api.load_library(Path::new("bad\0path")).is_err());
    }
}
