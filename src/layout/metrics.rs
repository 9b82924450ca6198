use crate::units::Pt;

/// Estimates how much room text takes up when set in a particular font.
///
/// Only [width](TextMetrics::width) is required. The vertical metrics default to
/// proportions of the font size that are typical of text faces; fonts loaded from
/// disk report their real values instead.
pub trait TextMetrics {
    /// The advance width of `text` at `size`. Must be zero for empty text and must
    /// not shrink when characters are added.
    fn width(&self, text: &str, size: Pt) -> Pt;

    /// Whether the face can draw `ch` at all
    fn supports(&self, _ch: char) -> bool {
        true
    }

    /// Distance from the baseline to the top of the tallest glyphs
    fn ascent(&self, size: Pt) -> Pt {
        size * 0.8
    }

    /// Distance from the baseline to the bottom of the lowest glyphs. Negative.
    fn descent(&self, size: Pt) -> Pt {
        size * -0.2
    }

    /// Extra space between consecutive lines
    fn leading(&self, size: Pt) -> Pt {
        size * 0.2
    }

    /// How far apart two consecutive baselines are
    fn line_height(&self, size: Pt) -> Pt {
        self.leading(size) + self.ascent(size) - self.descent(size)
    }
}

impl<M: TextMetrics + ?Sized> TextMetrics for &M {
    fn width(&self, text: &str, size: Pt) -> Pt {
        (**self).width(text, size)
    }

    fn supports(&self, ch: char) -> bool {
        (**self).supports(ch)
    }

    fn ascent(&self, size: Pt) -> Pt {
        (**self).ascent(size)
    }

    fn descent(&self, size: Pt) -> Pt {
        (**self).descent(size)
    }

    fn leading(&self, size: Pt) -> Pt {
        (**self).leading(size)
    }

    fn line_height(&self, size: Pt) -> Pt {
        (**self).line_height(size)
    }
}

/// Metrics where every character has the same advance, expressed as a fraction of
/// the font size (an em). Useful when no font file is at hand, and for laying out
/// tables whose output only needs to be approximately right.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct UniformMetrics {
    pub advance: f32,
}

impl UniformMetrics {
    pub fn new(advance: f32) -> UniformMetrics {
        UniformMetrics { advance }
    }
}

impl Default for UniformMetrics {
    /// Half an em per character, close to the average of a proportional text face
    fn default() -> Self {
        UniformMetrics { advance: 0.5 }
    }
}

impl TextMetrics for UniformMetrics {
    fn width(&self, text: &str, size: Pt) -> Pt {
        size * (self.advance * text.chars().count() as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_width_grows_with_length() {
        let m = UniformMetrics::default();
        assert_eq!(m.width("", Pt(10.0)), Pt(0.0));
        assert_eq!(m.width("abcd", Pt(10.0)), Pt(20.0));
        assert!(m.width("abcde", Pt(10.0)) > m.width("abcd", Pt(10.0)));
    }

    #[test]
    fn default_line_height_is_font_size_plus_leading() {
        let m = UniformMetrics::default();
        assert!((m.line_height(Pt(10.0)).0 - 12.0).abs() < 1e-4);
        assert!(m.descent(Pt(10.0)) < Pt(0.0));
    }
}
