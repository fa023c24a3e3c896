use crate::config::pure::{parse_ini, serialize_ini, DEFAULT_CONFIG};
use crate::config::types::Section;

use std::error::Error;
use std::fs;
use std::path::Path;

/// Read and parse an existing config file.
///
/// Invalid UTF-8 is replaced rather than rejected; paths on Linux may hold
/// arbitrary bytes.
pub fn read_sections(path: &Path) -> Result<Vec<Section>, Box<dyn Error>> {
    let bytes = fs::read(path)?;
    Ok(parse_ini(&String::from_utf8_lossy(&bytes)))
}

/// Overwrite the config file with the given sections
pub fn write_sections(path: &Path, sections: &[Section]) -> Result<(), Box<dyn Error>> {
    fs::write(path, serialize_ini(sections))?;
    Ok(())
}

/// Write the default config file
pub fn write_default(path: &Path) -> Result<(), Box<dyn Error>> {
    fs::write(path, DEFAULT_CONFIG)?;
    Ok(())
}
