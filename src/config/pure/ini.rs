//! Flat INI parser and serializer
//!
//! Only `[section]` headers and `key = value` pairs are understood. Lines
//! starting with `;` or `#` are comments.

use crate::config::types::Section;

/// Contents written when no config file exists yet
pub const DEFAULT_CONFIG: &str = "\
[uc-online]
AppID = 480
GameExecutable =
GameArguments =
; Directory holding the Steam API library (leave empty to use default loading)
; Example: SteamApiDllPath = /home/user/games/spacewar
SteamApiDllPath =

[Logging]
EnableLogging = true
LogFile = uc-online.log
";

/// Index of the section called `name` (any case), appending it if absent
pub fn section_index(sections: &mut Vec<Section>, name: &str) -> usize {
    match sections
        .iter()
        .position(|s| s.name.eq_ignore_ascii_case(name))
    {
        Some(idx) => idx,
        None => {
            sections.push(Section::new(name));
            sections.len() - 1
        }
    }
}

/// Parse INI text into sections.
///
/// Key/value lines outside of any section, lines without `=` and lines
/// starting with `=` are dropped. Repeated sections merge, repeated keys
/// overwrite.
pub fn parse_ini(content: &str) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();
    let mut current: Option<usize> = None;

    for line in content.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }

        // Section header
        if line.len() >= 2 && line.starts_with('[') && line.ends_with(']') {
            let name = &line[1..line.len() - 1];
            if name.is_empty() {
                current = None;
                continue;
            }
            current = Some(section_index(&mut sections, name));
            continue;
        }

        // Key=value pair
        let Some(idx) = current else {
            continue;
        };
        match line.find('=') {
            Some(pos) if pos > 0 => {
                let key = line[..pos].trim();
                let value = line[pos + 1..].trim();
                sections[idx].set(key, value);
            }
            _ => {}
        }
    }

    sections
}

/// Serialize sections back to INI text, one blank line after each section
pub fn serialize_ini(sections: &[Section]) -> String {
    let mut output = String::new();

    for section in sections {
        output.push_str(&format!("[{}]\n", section.name));
        for (key, value) in &section.entries {
            output.push_str(&format!("{} = {}\n", key, value));
        }
        output.push('\n');
    }

    output
}
