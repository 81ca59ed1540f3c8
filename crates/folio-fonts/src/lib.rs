//! Block-letter banner font for the folio hero section.

/// Rows in every glyph.
pub const BANNER_HEIGHT: usize = 5;

/// Columns between adjacent glyphs.
const LETTER_GAP: usize = 1;

/// Blank glyph used for spaces and unsupported characters.
const BLANK: [&str; BANNER_HEIGHT] = ["   ", "   ", "   ", "   ", "   "];

/// Block letters A-Z, 5 rows tall and 5 columns wide.
pub const LETTERS: [[&str; BANNER_HEIGHT]; 26] = [
    // A
    [
        " ███ ",
        "█   █",
        "█████",
        "█   █",
        "█   █",
    ],
    // B
    [
        "████ ",
        "█   █",
        "████ ",
        "█   █",
        "████ ",
    ],
    // C
    [
        " ████",
        "█    ",
        "█    ",
        "█    ",
        " ████",
    ],
    // D
    [
        "████ ",
        "█   █",
        "█   █",
        "█   █",
        "████ ",
    ],
    // E
    [
        "█████",
        "█    ",
        "████ ",
        "█    ",
        "█████",
    ],
    // F
    [
        "█████",
        "█    ",
        "████ ",
        "█    ",
        "█    ",
    ],
    // G
    [
        " ████",
        "█    ",
        "█  ██",
        "█   █",
        " ████",
    ],
    // H
    [
        "█   █",
        "█   █",
        "█████",
        "█   █",
        "█   █",
    ],
    // I
    [
        "█████",
        "  █  ",
        "  █  ",
        "  █  ",
        "█████",
    ],
    // J
    [
        "█████",
        "   █ ",
        "   █ ",
        "█  █ ",
        " ██  ",
    ],
    // K
    [
        "█   █",
        "█  █ ",
        "███  ",
        "█  █ ",
        "█   █",
    ],
    // L
    [
        "█    ",
        "█    ",
        "█    ",
        "█    ",
        "█████",
    ],
    // M
    [
        "█   █",
        "██ ██",
        "█ █ █",
        "█   █",
        "█   █",
    ],
    // N
    [
        "█   █",
        "██  █",
        "█ █ █",
        "█  ██",
        "█   █",
    ],
    // O
    [
        " ███ ",
        "█   █",
        "█   █",
        "█   █",
        " ███ ",
    ],
    // P
    [
        "████ ",
        "█   █",
        "████ ",
        "█    ",
        "█    ",
    ],
    // Q
    [
        " ███ ",
        "█   █",
        "█ █ █",
        "█  █ ",
        " ██ █",
    ],
    // R
    [
        "████ ",
        "█   █",
        "████ ",
        "█  █ ",
        "█   █",
    ],
    // S
    [
        " ████",
        "█    ",
        " ███ ",
        "    █",
        "████ ",
    ],
    // T
    [
        "█████",
        "  █  ",
        "  █  ",
        "  █  ",
        "  █  ",
    ],
    // U
    [
        "█   █",
        "█   █",
        "█   █",
        "█   █",
        " ███ ",
    ],
    // V
    [
        "█   █",
        "█   █",
        "█   █",
        " █ █ ",
        "  █  ",
    ],
    // W
    [
        "█   █",
        "█   █",
        "█ █ █",
        "██ ██",
        "█   █",
    ],
    // X
    [
        "█   █",
        " █ █ ",
        "  █  ",
        " █ █ ",
        "█   █",
    ],
    // Y
    [
        "█   █",
        " █ █ ",
        "  █  ",
        "  █  ",
        "  █  ",
    ],
    // Z
    [
        "█████",
        "   █ ",
        "  █  ",
        " █   ",
        "█████",
    ],
];

/// Glyph for `c`. Letters are case-insensitive; anything else is blank.
pub fn glyph(c: char) -> [&'static str; BANNER_HEIGHT] {
    let upper = c.to_ascii_uppercase();
    if upper.is_ascii_uppercase() {
        LETTERS[(upper as u8 - b'A') as usize]
    } else {
        BLANK
    }
}

/// Width in columns of the banner for `text`.
pub fn banner_width(text: &str) -> usize {
    let glyphs: usize = text.chars().map(|c| glyph_width(glyph(c))).sum();
    let gaps = text.chars().count().saturating_sub(1) * LETTER_GAP;
    glyphs + gaps
}

/// Build the banner for `text`.
///
/// # Returns
/// [`BANNER_HEIGHT`] strings of equal width, one per row. Empty text yields
/// empty rows.
pub fn build_banner(text: &str) -> Vec<String> {
    let glyphs: Vec<_> = text.chars().map(glyph).collect();
    (0..BANNER_HEIGHT)
        .map(|row| {
            let mut line = String::new();
            for (i, g) in glyphs.iter().enumerate() {
                if i > 0 {
                    line.push_str(&" ".repeat(LETTER_GAP));
                }
                line.push_str(g[row]);
            }
            line
        })
        .collect()
}

/// Build the banner only if it fits in `max_width` columns.
pub fn fit_banner(text: &str, max_width: usize) -> Option<Vec<String>> {
    (banner_width(text) <= max_width).then(|| build_banner(text))
}

fn glyph_width(g: [&str; BANNER_HEIGHT]) -> usize {
    g[0].chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_letter_is_rectangular() {
        for g in LETTERS {
            let width = glyph_width(g);
            assert!(g.iter().all(|row| row.chars().count() == width));
        }
    }

    #[test]
    fn test_banner_rows_have_equal_width() {
        let rows = build_banner("Sharon K");
        assert_eq!(rows.len(), BANNER_HEIGHT);
        let width = banner_width("Sharon K");
        assert!(rows.iter().all(|row| row.chars().count() == width));
    }

    #[test]
    fn test_banner_width() {
        assert_eq!(banner_width(""), 0);
        assert_eq!(banner_width("A"), 5);
        assert_eq!(banner_width("AB"), 11);
        assert_eq!(banner_width("A B"), 15);
    }

    #[test]
    fn test_case_insensitive_and_unknown_blank() {
        assert_eq!(glyph('s'), glyph('S'));
        assert_eq!(glyph('7'), BLANK);
    }

    #[test]
    fn test_fit_banner() {
        assert!(fit_banner("SHARON", 35).is_some());
        assert!(fit_banner("SHARON", 34).is_none());
    }
}
