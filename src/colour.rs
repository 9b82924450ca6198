use pdf_writer::Content;

/// A colour, expressed in RGB, CMYK or grey colour spaces
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// DeviceRGB colour; r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// DeviceCMYK colour; c, m, y, and k range from 0.0 to 1.0
    CMYK { c: f32, m: f32, y: f32, k: f32 },
    /// DeviceGray colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0.0 to 1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour::RGB { r, g, b }
    }

    /// Create a new colour in the RGB space. r, g, and b range from 0 to 255
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour::RGB {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Create a new colour in the Gray space, g ranges from 0.0 to 1.0
    pub fn new_grey(g: f32) -> Colour {
        Colour::Grey { g }
    }

    /// Use this colour for subsequent strokes (cell borders)
    pub fn set_stroke(&self, content: &mut Content) {
        match *self {
            Colour::RGB { r, g, b } => content.set_stroke_rgb(r, g, b),
            Colour::CMYK { c, m, y, k } => content.set_stroke_cmyk(c, m, y, k),
            Colour::Grey { g } => content.set_stroke_gray(g),
        };
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strokes_in_the_colour_space_given() {
        let mut content = Content::new();
        Colour::new_grey(0.5).set_stroke(&mut content);
        Colour::new_rgb_bytes(255, 0, 0).set_stroke(&mut content);
        Colour::CMYK {
            c: 0.0,
            m: 0.0,
            y: 0.0,
            k: 1.0,
        }
        .set_stroke(&mut content);
        let ops = String::from_utf8(content.finish()).unwrap();

        assert!(ops.contains("0.5 G"));
        assert!(ops.contains("1 0 0 RG"));
        assert!(ops.contains("0 0 0 1 K"));
        assert_eq!(Colour::new_rgb(1.0, 0.0, 0.0), Colour::new_rgb_bytes(255, 0, 0));
    }
}
