//! Pipelines module (orchestration)

mod resolve_library;

pub use resolve_library::resolve_steam_api;
