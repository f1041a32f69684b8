use crate::catalog::{self, CONCEAL, ColorEntry, ColorKind, INVERT};
use crate::table::align_columns;

const SAMPLE: &str = "  Test Text  ";

/// SGR parameters for rendering `text` on `backdrop`. The pseudo-colors
/// borrow the terminal defaults, so a `foreground` backdrop is painted with
/// reverse video and the two self-pairs fall back to concealed text rather
/// than inverting an inversion.
pub fn cell_params(text: &ColorEntry, backdrop: &ColorEntry) -> Vec<u8> {
    match (text.kind(), backdrop.kind()) {
        (ColorKind::Foreground, ColorKind::Foreground) => vec![INVERT, CONCEAL],
        (_, ColorKind::Foreground) => vec![text.bg, INVERT],
        (ColorKind::Background, ColorKind::Background) => vec![text.fg, CONCEAL],
        _ => vec![text.fg, backdrop.bg],
    }
}

fn cell(text: &ColorEntry, backdrop: &ColorEntry) -> String {
    let params = cell_params(text, backdrop)
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(";");
    format!("\x1b[{params}m{SAMPLE}\x1b[0m")
}

/// Every tested color as text, one column per reference backdrop.
pub fn background_table() -> String {
    build(|tested, reference| cell(tested, reference))
}

/// Every tested color as backdrop, one column per reference text color.
pub fn text_table() -> String {
    build(|tested, reference| cell(reference, tested))
}

fn build(cell_for: impl Fn(&ColorEntry, &ColorEntry) -> String) -> String {
    let references: Vec<&ColorEntry> = catalog::REFERENCE_COLORS
        .iter()
        .filter_map(|name| catalog::lookup(name))
        .collect();

    let mut header = vec![String::new()];
    header.extend(references.iter().map(|entry| entry.name.to_string()));

    let mut rows = vec![header.join("\t")];
    for tested in &catalog::CATALOG {
        let mut cols = vec![tested.name.to_string()];
        for &reference in &references {
            cols.push(cell_for(tested, reference));
        }
        rows.push(cols.join("\t"));
    }
    align_columns(&rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str) -> &'static ColorEntry {
        catalog::lookup(name).unwrap()
    }

    #[test]
    fn concrete_pair_composes_codes_directly() {
        assert_eq!(cell_params(entry("red"), entry("black")), vec![31, 40]);
        assert_eq!(
            cell_params(entry("brightWhite"), entry("brightBlack")),
            vec![97, 100]
        );
    }

    #[test]
    fn foreground_backdrop_uses_invert() {
        assert_eq!(cell_params(entry("red"), entry("foreground")), vec![41, INVERT]);
        assert_eq!(
            cell_params(entry("background"), entry("foreground")),
            vec![109, INVERT]
        );
    }

    #[test]
    fn background_backdrop_composes_directly() {
        assert_eq!(cell_params(entry("red"), entry("background")), vec![31, 109]);
        assert_eq!(
            cell_params(entry("foreground"), entry("background")),
            vec![39, 109]
        );
    }

    #[test]
    fn self_pairs_degrade_to_hidden() {
        assert_eq!(
            cell_params(entry("foreground"), entry("foreground")),
            vec![INVERT, CONCEAL]
        );
        assert_eq!(
            cell_params(entry("background"), entry("background")),
            vec![49, CONCEAL]
        );
    }

    #[test]
    fn tables_have_one_row_per_entry_and_six_cells() {
        for table in [background_table(), text_table()] {
            let lines: Vec<&str> = table.lines().collect();
            assert_eq!(lines.len(), 1 + catalog::CATALOG.len());
            for line in &lines[1..] {
                assert_eq!(line.matches(SAMPLE.trim()).count(), 6, "bad row: {line}");
            }
        }
    }

    #[test]
    fn diagonal_cells_are_hidden_in_both_tables() {
        let hidden = format!("\x1b[{INVERT};{CONCEAL}m{SAMPLE}\x1b[0m");
        assert!(background_table().contains(&hidden));
        assert!(text_table().contains(&hidden));
    }
}
