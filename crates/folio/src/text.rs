//! Word wrapping by display width.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of `s` in terminal columns.
pub fn width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Wrap `text` into lines at most `max_width` columns wide.
///
/// Breaks on whitespace; words wider than a line are split by character.
pub fn wrap(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = width(word);
        let needed = if current.is_empty() { word_width } else { current_width + 1 + word_width };

        if needed <= max_width {
            if !current.is_empty() {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(word);
            current_width += word_width;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= max_width {
            current.push_str(word);
            current_width = word_width;
            continue;
        }

        for c in word.chars() {
            let w = c.width().unwrap_or(0);
            if current_width + w > max_width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(c);
            current_width += w;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_on_words() {
        assert_eq!(
            wrap("the quick brown fox jumps", 10),
            vec!["the quick", "brown fox", "jumps"]
        );
    }

    #[test]
    fn test_wrap_exact_fit() {
        assert_eq!(wrap("abc def", 7), vec!["abc def"]);
    }

    #[test]
    fn test_wrap_splits_long_words() {
        assert_eq!(wrap("abcdefgh ij", 3), vec!["abc", "def", "gh", "ij"]);
    }

    #[test]
    fn test_wrap_collapses_whitespace() {
        assert_eq!(wrap("  a \n  b  ", 80), vec!["a b"]);
        assert!(wrap("   ", 10).is_empty());
    }

    #[test]
    fn test_wrap_wide_chars() {
        assert_eq!(width("8×8"), 3);
        assert_eq!(wrap("日本語", 4), vec!["日本", "語"]);
    }
}
