//! Operations module (config file I/O)

mod io;

pub use io::{read_sections, write_default, write_sections};
