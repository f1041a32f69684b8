use regex::Regex;

use crate::catalog::{self, ColorEntry, ColorKind, INVERT};
use crate::palette::Theme;

const SWATCH: &str = "      ";

/// Renders the main reference table. The theme columns are decided once per
/// run: they appear whenever a palette loaded at all, and rows the palette
/// does not cover show `N/A`.
pub fn main_table(order: &[String], theme: Option<&Theme>) -> String {
    let mut rows = vec![header(theme.is_some())];
    for name in order {
        rows.push(row(name, theme));
    }
    align_columns(&rows)
}

fn header(themed: bool) -> String {
    let mut cols = vec!["name", "fg", "bg", "fg swatch", "bg swatch"];
    if themed {
        cols.extend(["hex", "rgb", "theme"]);
    }
    cols.join("\t")
}

fn row(name: &str, theme: Option<&Theme>) -> String {
    let mut cols = vec![name.to_string()];

    match catalog::lookup(name) {
        Some(entry) => {
            cols.push(entry.fg.to_string());
            cols.push(entry.bg.to_string());
            cols.push(code_swatch(entry.fg));
            cols.push(background_swatch(entry));
        }
        // Palette-only extras have no SGR codes.
        None => cols.extend(["N/A".into(), "N/A".into(), "N/A".into(), "N/A".into()]),
    }

    if let Some(theme) = theme {
        match theme.get(name) {
            Some(hex) => {
                cols.push(hex.to_string());
                match hex_to_rgb(hex) {
                    Some((r, g, b)) => {
                        cols.push(format!("rgb({r},{g},{b})"));
                        cols.push(rgb_swatch(r, g, b));
                    }
                    None => cols.extend(["N/A".into(), "N/A".into()]),
                }
            }
            None => cols.extend(["N/A".into(), "N/A".into(), "N/A".into()]),
        }
    }

    cols.join("\t")
}

fn code_swatch(code: u8) -> String {
    format!("\x1b[{code}m{SWATCH}\x1b[0m")
}

/// Code 99 is not a renderable background; reverse video paints the default
/// foreground into the background channel instead.
fn background_swatch(entry: &ColorEntry) -> String {
    match entry.kind() {
        ColorKind::Foreground => code_swatch(INVERT),
        _ => code_swatch(entry.bg),
    }
}

fn rgb_swatch(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[48;2;{r};{g};{b}m{SWATCH}\x1b[0m")
}

pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    if hex.len() != 7 || !hex.starts_with('#') {
        return None;
    }
    let r = u8::from_str_radix(&hex[1..3], 16).ok()?;
    let g = u8::from_str_radix(&hex[3..5], 16).ok()?;
    let b = u8::from_str_radix(&hex[5..7], 16).ok()?;
    Some((r, g, b))
}

/// Pads tab-delimited rows into aligned columns. Widths are computed over the
/// text that actually lands on screen, so embedded SGR sequences are stripped
/// before measuring.
pub fn align_columns(rows: &[String]) -> String {
    let sgr = Regex::new(r"\x1b\[[0-9;]*m").unwrap();
    let visible = |cell: &str| sgr.replace_all(cell, "").chars().count();

    let split: Vec<Vec<&str>> = rows.iter().map(|row| row.split('\t').collect()).collect();
    let columns = split.iter().map(|cells| cells.len()).max().unwrap_or(0);
    let mut widths = vec![0usize; columns];
    for cells in &split {
        for (i, cell) in cells.iter().enumerate() {
            widths[i] = widths[i].max(visible(cell));
        }
    }

    let mut out = String::new();
    for cells in &split {
        let mut line = String::new();
        for (i, cell) in cells.iter().enumerate() {
            line.push_str(cell);
            if i + 1 < cells.len() {
                let pad = widths[i].saturating_sub(visible(cell)) + 2;
                line.push_str(&" ".repeat(pad));
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
