//! Operations module (atomic side effects)

mod appid_file;
mod find_libraries;
mod spawn;

pub use appid_file::write_appid_file;
pub use find_libraries::find_steam_api_libraries;
pub use spawn::spawn_game;
