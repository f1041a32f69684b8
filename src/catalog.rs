use crate::palette::Theme;

/// SGR attribute: reverse video.
pub const INVERT: u8 = 7;
/// SGR attribute: concealed text.
pub const CONCEAL: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorKind {
    Concrete,
    Foreground,
    Background,
}

/// One named color with its SGR codes for the foreground and background
/// contexts.
#[derive(Debug, Clone, Copy)]
pub struct ColorEntry {
    pub name: &'static str,
    pub fg: u8,
    pub bg: u8,
}

impl ColorEntry {
    pub fn kind(&self) -> ColorKind {
        match self.name {
            "foreground" => ColorKind::Foreground,
            "background" => ColorKind::Background,
            _ => ColorKind::Concrete,
        }
    }
}

/// The 16 base colors plus the `foreground`/`background` pseudo-colors, in
/// display order. The pseudo-color codes 99 and 109 are the +60 analogues of
/// the default-color codes 39/49; terminals do not render them, so swatch and
/// variation rendering special-case those entries.
pub const CATALOG: [ColorEntry; 18] = [
    ColorEntry { name: "black", fg: 30, bg: 40 },
    ColorEntry { name: "red", fg: 31, bg: 41 },
    ColorEntry { name: "green", fg: 32, bg: 42 },
    ColorEntry { name: "yellow", fg: 33, bg: 43 },
    ColorEntry { name: "blue", fg: 34, bg: 44 },
    ColorEntry { name: "magenta", fg: 35, bg: 45 },
    ColorEntry { name: "cyan", fg: 36, bg: 46 },
    ColorEntry { name: "white", fg: 37, bg: 47 },
    ColorEntry { name: "brightBlack", fg: 90, bg: 100 },
    ColorEntry { name: "brightRed", fg: 91, bg: 101 },
    ColorEntry { name: "brightGreen", fg: 92, bg: 102 },
    ColorEntry { name: "brightYellow", fg: 93, bg: 103 },
    ColorEntry { name: "brightBlue", fg: 94, bg: 104 },
    ColorEntry { name: "brightMagenta", fg: 95, bg: 105 },
    ColorEntry { name: "brightCyan", fg: 96, bg: 106 },
    ColorEntry { name: "brightWhite", fg: 97, bg: 107 },
    ColorEntry { name: "foreground", fg: 39, bg: 99 },
    ColorEntry { name: "background", fg: 49, bg: 109 },
];

/// Reference colors the variation matrices test every catalog entry against.
pub const REFERENCE_COLORS: [&str; 6] = [
    "black",
    "brightBlack",
    "white",
    "brightWhite",
    "foreground",
    "background",
];

pub fn lookup(name: &str) -> Option<&'static ColorEntry> {
    CATALOG.iter().find(|entry| entry.name == name)
}

/// Canonical names in fixed order, then palette-only extras in the order the
/// palette file introduced them.
pub fn display_order(theme: Option<&Theme>) -> Vec<String> {
    let mut names: Vec<String> = CATALOG.iter().map(|entry| entry.name.to_string()).collect();
    if let Some(theme) = theme {
        for name in theme.color_names() {
            if lookup(name).is_none() {
                names.push(name.to_string());
            }
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_codes_match_published_table() {
        let red = lookup("red").unwrap();
        assert_eq!((red.fg, red.bg), (31, 41));
        let cyan = lookup("brightCyan").unwrap();
        assert_eq!((cyan.fg, cyan.bg), (96, 106));
        let white = lookup("white").unwrap();
        assert_eq!((white.fg, white.bg), (37, 47));
    }

    #[test]
    fn pseudo_colors_use_default_codes() {
        let fg = lookup("foreground").unwrap();
        assert_eq!((fg.fg, fg.bg), (39, 99));
        assert_eq!(fg.kind(), ColorKind::Foreground);
        let bg = lookup("background").unwrap();
        assert_eq!((bg.fg, bg.bg), (49, 109));
        assert_eq!(bg.kind(), ColorKind::Background);
    }

    #[test]
    fn catalog_has_eighteen_entries() {
        assert_eq!(CATALOG.len(), 18);
        assert_eq!(CATALOG[0].name, "black");
        assert_eq!(CATALOG[17].name, "background");
    }

    #[test]
    fn lookup_misses_unknown_names() {
        assert!(lookup("mauve").is_none());
    }

    #[test]
    fn reference_colors_all_resolve() {
        for name in REFERENCE_COLORS {
            assert!(lookup(name).is_some(), "missing reference color {name}");
        }
    }

    #[test]
    fn display_order_appends_palette_extras() {
        let theme = crate::palette::parse(
            r##"{
            "red": "#DC322F",
            "accent": "#123456",
            "cursorline": "#654321"
        }"##,
        );
        let order = display_order(Some(&theme));
        assert_eq!(order.len(), 20);
        assert_eq!(order[0], "black");
        assert_eq!(order[18], "accent");
        assert_eq!(order[19], "cursorline");
    }
}
