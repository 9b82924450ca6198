use super::metrics::TextMetrics;
use crate::units::Pt;

/// Clean up cell text so that it can be measured and drawn on a single logical
/// line: whitespace of any kind (newlines, tabs, ...) becomes a space, other
/// control characters are dropped, runs of whitespace collapse into a single
/// space, and the ends are trimmed.
///
/// ```
/// use pdf_table_gen::layout::normalize;
///
/// assert_eq!(normalize("foo\n\tbar   baz"), "foo bar baz");
/// ```
pub fn normalize(text: &str) -> String {
    normalize_with(text, |_| true)
}

/// Like [normalize], but also drops any characters that the font behind `metrics`
/// has no glyph for, so that what gets measured is exactly what gets drawn.
pub fn normalize_for<M: TextMetrics + ?Sized>(text: &str, metrics: &M) -> String {
    normalize_with(text, |ch| metrics.supports(ch))
}

fn normalize_with<F: Fn(char) -> bool>(text: &str, keep: F) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            pending_space = true;
        } else if !ch.is_control() && keep(ch) {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(ch);
        }
    }
    out
}

/// Estimate how many lines `text` wraps onto in a column `column_width` wide.
///
/// The estimate assumes every character is as wide as the average character of
/// `text`, so it can be off by a line for faces with very uneven glyph widths or
/// for text that breaks badly at word boundaries. It is always at least 1: an
/// empty cell still takes up a line.
pub fn lines_needed<M: TextMetrics + ?Sized>(
    text: &str,
    column_width: Pt,
    size: Pt,
    metrics: &M,
) -> usize {
    let length = text.chars().count();
    if length == 0 {
        return 1;
    }

    let average_char_width: Pt = metrics.width(text, size) / length as f32;
    if average_char_width <= Pt(0.0) || !average_char_width.is_finite() {
        // a face that reports no width: nothing will ever wrap
        return 1;
    }

    let chars_per_line: f32 = column_width / average_char_width;
    let lines = (length as f32 / chars_per_line).ceil();
    if lines.is_finite() && lines >= 1.0 {
        lines as usize
    } else {
        1
    }
}

/// Break already-normalized `text` into lines no wider than `width`, breaking at
/// spaces where possible and inside words when a single word is too wide. Empty
/// text produces no lines.
pub fn wrap_lines<M: TextMetrics + ?Sized>(
    text: &str,
    width: Pt,
    size: Pt,
    metrics: &M,
) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let candidate = if line.is_empty() {
            word.to_string()
        } else {
            format!("{line} {word}")
        };

        if metrics.width(&candidate, size) <= width {
            line = candidate;
            continue;
        }

        if !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }

        if metrics.width(word, size) <= width {
            line.push_str(word);
            continue;
        }

        // no break point inside the word, split it wherever it overflows
        for ch in word.chars() {
            line.push(ch);
            if line.chars().count() > 1 && metrics.width(&line, size) > width {
                line.pop();
                lines.push(std::mem::take(&mut line));
                line.push(ch);
            }
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::UniformMetrics;

    struct Weightless;

    impl TextMetrics for Weightless {
        fn width(&self, _text: &str, _size: Pt) -> Pt {
            Pt(0.0)
        }
    }

    struct NoDigits;

    impl TextMetrics for NoDigits {
        fn width(&self, text: &str, size: Pt) -> Pt {
            UniformMetrics::default().width(text, size)
        }

        fn supports(&self, ch: char) -> bool {
            !ch.is_ascii_digit()
        }
    }

    #[test]
    fn normalizes_control_characters_and_whitespace() {
        assert_eq!(normalize("foo\n\tbar   baz"), "foo bar baz");
        assert_eq!(normalize("  padded\r\n"), "padded");
        assert_eq!(normalize("stray\u{81} C1\u{8e} codes"), "stray C1 codes");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \t\n "), "");
    }

    #[test]
    fn normalizing_twice_changes_nothing() {
        let once = normalize("a\t\tb \n c\u{8e}");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn drops_glyphs_the_font_lacks() {
        assert_eq!(normalize_for("R1 10k 1%", &NoDigits), "R k %");
    }

    #[test]
    fn empty_text_takes_one_line() {
        let m = UniformMetrics::default();
        assert_eq!(lines_needed("", Pt(50.0), Pt(10.0), &m), 1);
    }

    #[test]
    fn zero_width_faces_never_wrap() {
        assert_eq!(lines_needed("anything at all", Pt(1.0), Pt(10.0), &Weightless), 1);
    }

    #[test]
    fn estimates_lines_from_average_width() {
        // 5pt per character, 10 characters per line
        let m = UniformMetrics::default();
        assert_eq!(lines_needed("abcdefghij", Pt(50.0), Pt(10.0), &m), 1);
        assert_eq!(lines_needed("abcdefghijk", Pt(50.0), Pt(10.0), &m), 2);
        assert_eq!(lines_needed(&"x".repeat(30), Pt(50.0), Pt(10.0), &m), 3);
    }

    #[test]
    fn wraps_at_word_boundaries() {
        let m = UniformMetrics::default();
        let lines = wrap_lines("voltage regulator adjustable", Pt(50.0), Pt(10.0), &m);
        assert_eq!(lines, vec!["voltage", "regulator", "adjustable"]);

        let lines = wrap_lines("1 k ohm resistor", Pt(50.0), Pt(10.0), &m);
        assert_eq!(lines, vec!["1 k ohm", "resistor"]);
    }

    #[test]
    fn splits_words_that_cannot_fit() {
        let m = UniformMetrics::default();
        let lines = wrap_lines("abcdefghijklmnopqrstuvwxy", Pt(50.0), Pt(10.0), &m);
        assert_eq!(lines, vec!["abcdefghij", "klmnopqrst", "uvwxy"]);
        assert!(wrap_lines("", Pt(50.0), Pt(10.0), &m).is_empty());
    }
}
