use std::{fs, path::Path};

use regex::Regex;

/// Named hex colors pulled out of a palette file, in file-encounter order.
#[derive(Debug, Clone)]
pub struct Theme {
    pub display_name: Option<String>,
    entries: Vec<(String, String)>,
}

impl Theme {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn color_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn color_count(&self) -> usize {
        self.entries.len()
    }
}

/// Reads a palette file. A missing or unreadable file is not fatal: the run
/// continues without theme columns after a warning on stderr.
pub fn load(path: &Path) -> Option<Theme> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(_) => {
            eprintln!(
                "Palette file '{}' not found. Skipping theme codes and colors.",
                path.display()
            );
            return None;
        }
    };
    Some(parse(&raw))
}

/// Line-oriented extraction of `"key": "#hex"` pairs. This is deliberately
/// not a JSON parser: a line contributes a color iff it carries a quoted
/// identifier and a `#` followed by hex digits, and anything else is skipped.
/// The top-level `"name"` field becomes the display title, never a color.
pub fn parse(raw: &str) -> Theme {
    let name_re = Regex::new(r#""name"\s*:\s*"([^"]*)""#).unwrap();
    let key_re = Regex::new(r#""([A-Za-z_][A-Za-z0-9_]*)""#).unwrap();
    let hex_re = Regex::new(r"#([0-9A-Fa-f]+)").unwrap();

    let display_name = name_re
        .captures(raw)
        .map(|caps| caps[1].to_string())
        .filter(|name| !name.is_empty());

    let mut entries: Vec<(String, String)> = Vec::new();
    for line in raw.lines() {
        let Some(key) = key_re.captures(line) else {
            continue;
        };
        let Some(hex) = hex_re.captures(line) else {
            continue;
        };
        let key = key[1].to_string();
        if key == "name" {
            continue;
        }
        let value = format!("#{}", &hex[1]);
        match entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(slot) => slot.1 = value,
            None => entries.push((key, value)),
        }
    }

    Theme {
        display_name,
        entries,
    }
}
