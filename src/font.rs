use crate::{
    layout::TextMetrics,
    refs::{ObjectReferences, RefType},
    PDFError, Pt,
};
use owned_ttf_parser::{AsFaceRef, Face, GlyphId, OwnedFace};
use pdf_writer::{
    types::{CidFontType, FontFlags, SystemInfo},
    Filter, Finish, Name, Pdf, Ref, Str,
};
use std::collections::{BTreeMap, HashMap};

/// A parsed TrueType or OpenType font. The whole font file is embedded in the
/// generated PDF, so large fonts make for large documents.
///
/// Fonts are added to a [Document](crate::Document) and referred to by their id
/// from then on. A loaded font also measures text for the layout engine through
/// its [TextMetrics] implementation.
pub struct Font {
    pub face: OwnedFace,
}

/// What the PDF needs to know about one glyph
#[derive(Debug, Copy, Clone)]
struct Glyph {
    ch: char,
    advance: u16,
    height: i32,
}

impl Font {
    /// Load a font from raw bytes, returning an error if the font could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, PDFError> {
        let face = OwnedFace::from_vec(bytes, 0)?;
        Ok(Font { face })
    }

    fn face(&self) -> &Face<'_> {
        self.face.as_face_ref()
    }

    fn find_name(&self, name_id: u16) -> Option<String> {
        self.face()
            .names()
            .into_iter()
            .find(|name| name.name_id == name_id && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// The full name of the font, if it has one
    pub fn name(&self) -> Option<String> {
        self.find_name(owned_ttf_parser::name_id::FULL_NAME)
    }

    /// The family name of the font, if it has one
    pub fn family(&self) -> Option<String> {
        self.find_name(owned_ttf_parser::name_id::FAMILY)
    }

    /// How many points one font unit is at `size`
    fn scaling(&self, size: Pt) -> Pt {
        size / self.face().units_per_em() as f32
    }

    /// The weight class of the font, 400 being regular and 700 bold
    pub fn weight(&self) -> u16 {
        self.face().weight().to_number()
    }

    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face().glyph_index(ch).map(|i| i.0)
    }

    pub fn replacement_glyph_id(&self) -> Option<u16> {
        self.glyph_id('\u{FFFD}')
    }

    /// Horizontal advance of a single glyph at `size`
    pub fn advance(&self, gid: u16, size: Pt) -> Pt {
        self.scaling(size) * self.face().glyph_hor_advance(GlyphId(gid)).unwrap_or_default() as f32
    }

    /// Every glyph reachable from a unicode codepoint, keyed (and so sorted) by id
    fn glyphs(&self) -> BTreeMap<u16, Glyph> {
        let face = self.face();
        let mut glyphs: BTreeMap<u16, Glyph> = BTreeMap::new();
        let Some(cmap) = face.tables().cmap else {
            return glyphs;
        };

        for subtable in cmap.subtables.into_iter().filter(|t| t.is_unicode()) {
            subtable.codepoints(|codepoint| {
                let Some(ch) = char::from_u32(codepoint) else {
                    return;
                };
                let Some(gid) = subtable.glyph_index(codepoint).filter(|g| g.0 > 0) else {
                    return;
                };
                let Some(advance) = face.glyph_hor_advance(gid) else {
                    return;
                };
                let height = face
                    .glyph_bounding_box(gid)
                    .map(|bbox| bbox.y_max as i32 - bbox.y_min as i32 - face.descender() as i32)
                    .unwrap_or(1000);
                glyphs.entry(gid.0).or_insert(Glyph {
                    ch,
                    advance,
                    height,
                });
            });
        }

        glyphs
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, font_index: usize, writer: &mut Pdf) {
        let glyphs = self.glyphs();
        let font_id = refs.gen(RefType::Font(font_index));
        let cid_font_id = self.write_cid(refs, font_index, &glyphs, writer);
        let to_unicode_id = self.write_to_unicode(refs, font_index, &glyphs, writer);

        let mut font = writer.type0_font(font_id);
        font.base_font(Name(format!("F{font_index}").as_bytes()));
        font.encoding_predefined(Name(b"Identity-H"));
        font.descendant_font(cid_font_id);
        font.to_unicode(to_unicode_id);
    }

    fn write_cid(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        glyphs: &BTreeMap<u16, Glyph>,
        writer: &mut Pdf,
    ) -> Ref {
        let descriptor_id = self.write_descriptor(refs, font_index, glyphs, writer);
        let id = refs.gen(RefType::CidFont(font_index));
        // glyph space is 1000 units per em
        let scaling = 1000.0 / self.face().units_per_em() as f32;

        let mut cid_font = writer.cid_font(id);
        cid_font.subtype(CidFontType::Type2);
        cid_font.base_font(Name(format!("F{font_index}").as_bytes()));
        cid_font.system_info(SystemInfo {
            registry: Str(b"Adobe"),
            ordering: Str(b"Identity"),
            supplement: 0,
        });
        cid_font.font_descriptor(descriptor_id);

        // the most common advance becomes the default width
        let mut counts: HashMap<u16, usize> = HashMap::new();
        for glyph in glyphs.values() {
            *counts.entry(glyph.advance).or_insert(0) += 1;
        }
        let default_width = counts
            .into_iter()
            .max_by_key(|&(advance, count)| (count, advance))
            .map(|(advance, _)| advance as f32 * scaling)
            .unwrap_or(1000.0);

        // runs of consecutive glyph ids share one entry in the widths array
        let mut runs: Vec<(u16, Vec<f32>)> = Vec::new();
        for (&gid, glyph) in glyphs.iter() {
            let width = glyph.advance as f32 * scaling;
            match runs.last_mut() {
                Some((start, widths)) if *start as usize + widths.len() == gid as usize => {
                    widths.push(width)
                }
                _ => runs.push((gid, vec![width])),
            }
        }

        let mut widths = cid_font.widths();
        for (start, run) in runs {
            widths.consecutive(start, run);
        }
        widths.finish();

        cid_font.default_width(default_width);
        cid_font.cid_to_gid_map_predefined(Name(b"Identity"));

        id
    }

    fn write_descriptor(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        glyphs: &BTreeMap<u16, Glyph>,
        writer: &mut Pdf,
    ) -> Ref {
        let data_id = refs.gen(RefType::FontData(font_index));
        let data = self.face.as_slice();
        writer
            .stream(data_id, data)
            .pair(Name(b"Length1"), data.len() as i32);

        let face = self.face();
        let scaling = 1000.0 / face.units_per_em() as f32;
        let max_width = glyphs.values().map(|g| g.advance).max().unwrap_or_default() as f32;
        let max_height = glyphs.values().map(|g| g.height).max().unwrap_or_default() as f32;
        let sum_width: f32 = glyphs.values().map(|g| g.advance as f32).sum();
        let avg_width = if glyphs.is_empty() {
            0.0
        } else {
            sum_width / glyphs.len() as f32
        };

        let mut flags = FontFlags::empty();
        flags.set(FontFlags::FIXED_PITCH, face.is_monospaced());
        flags.set(FontFlags::ITALIC, face.is_italic());
        flags.set(FontFlags::NON_SYMBOLIC, true);

        let name = self.name().unwrap_or_else(|| format!("F{font_index}"));
        let family = self.family().unwrap_or_else(|| name.clone());
        let cap_height = face.capital_height().map(|h| h as f32 * scaling);

        let id = refs.gen(RefType::FontDescriptor(font_index));
        let mut descriptor = writer.font_descriptor(id);
        descriptor.name(Name(name.as_bytes()));
        descriptor.family(Str(family.as_bytes()));
        descriptor.weight(self.weight());
        descriptor.flags(flags);
        descriptor.bbox(pdf_writer::Rect {
            x1: 0.0,
            y1: 0.0,
            x2: max_width * scaling,
            y2: max_height * scaling,
        });
        descriptor.italic_angle(face.italic_angle());
        descriptor.ascent(face.ascender() as f32 * scaling);
        descriptor.descent(face.descender() as f32 * scaling);
        descriptor.leading(face.line_gap() as f32 * scaling);
        descriptor.cap_height(cap_height.unwrap_or(1000.0));
        descriptor.x_height(
            face.x_height()
                .map(|h| h as f32 * scaling)
                .or(cap_height)
                .unwrap_or_default(),
        );
        // ttf has no stem widths; 80 is what most writers settle for
        descriptor.stem_v(80.0);
        descriptor.avg_width(avg_width * scaling);
        descriptor.max_width(max_width * scaling);
        descriptor.missing_width(max_width * scaling);
        descriptor.font_file2(data_id);

        id
    }

    fn write_to_unicode(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        glyphs: &BTreeMap<u16, Glyph>,
        writer: &mut Pdf,
    ) -> Ref {
        let id = refs.gen(RefType::ToUnicode(font_index));

        let mut map = String::from(
            "/CIDInit /ProcSet findresource begin\n\
             12 dict begin\n\
             begincmap\n\
             /CIDSystemInfo\n\
             << /Registry (Adobe)\n\
             /Ordering (UCS) /Supplement 0 >> def\n\
             /CMapName /Adobe-Identity-UCS def\n\
             /CMapType 2 def\n\
             1 begincodespacerange\n\
             <0000> <FFFF>\n\
             endcodespacerange\n",
        );

        // bfchar blocks hold at most 100 entries and never straddle a high byte
        let mut blocks: Vec<Vec<(u16, char)>> = Vec::new();
        for (&gid, glyph) in glyphs.iter() {
            match blocks.last_mut() {
                Some(block) if block.len() < 100 && block[0].0 >> 8 == gid >> 8 => {
                    block.push((gid, glyph.ch))
                }
                _ => blocks.push(vec![(gid, glyph.ch)]),
            }
        }

        for block in blocks {
            map.push_str(&format!("{} beginbfchar\n", block.len()));
            for (gid, ch) in block {
                let mut units = [0u16; 2];
                let utf16: String = ch
                    .encode_utf16(&mut units)
                    .iter()
                    .map(|unit| format!("{unit:04x}"))
                    .collect();
                map.push_str(&format!("<{gid:04x}> <{utf16}>\n"));
            }
            map.push_str("endbfchar\n");
        }

        map.push_str("endcmap CMapName currentdict /CMap defineresource pop end end\n");

        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
            map.as_bytes(),
            miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
        );
        writer
            .stream(id, compressed.as_slice())
            .filter(Filter::FlateDecode);

        id
    }
}

impl TextMetrics for Font {
    /// Sums glyph advances, skipping characters the font cannot draw
    fn width(&self, text: &str, size: Pt) -> Pt {
        text.chars()
            .filter_map(|ch| self.glyph_id(ch))
            .map(|gid| self.advance(gid, size))
            .sum()
    }

    fn supports(&self, ch: char) -> bool {
        self.glyph_id(ch).is_some()
    }

    fn ascent(&self, size: Pt) -> Pt {
        self.scaling(size) * self.face().ascender() as f32
    }

    fn descent(&self, size: Pt) -> Pt {
        self.scaling(size) * self.face().descender() as f32
    }

    fn leading(&self, size: Pt) -> Pt {
        self.scaling(size) * self.face().line_gap() as f32
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::layout::{lines_needed, normalize_for};

    pub(crate) fn dejavu() -> Font {
        Font::load(include_bytes!("../tests/fonts/DejaVuSans.ttf").to_vec())
            .expect("can parse DejaVu Sans")
    }

    #[test]
    fn reads_names_and_weight() {
        let font = dejavu();
        assert_eq!(font.family().as_deref(), Some("DejaVu Sans"));
        assert_eq!(font.weight(), 400);
    }

    #[test]
    fn width_grows_with_the_text() {
        let font = dejavu();
        let size = Pt(10.0);
        assert_eq!(font.width("", size), Pt(0.0));

        let mut previous = Pt(0.0);
        for end in 1..="delivery note".len() {
            let width = font.width(&"delivery note"[..end], size);
            assert!(width > previous, "width of {end} chars");
            previous = width;
        }
        assert!((font.width("abc", Pt(20.0)).0 - font.width("abc", size).0 * 2.0).abs() < 1e-3);
    }

    #[test]
    fn skips_characters_without_a_glyph() {
        let font = dejavu();
        assert!(font.supports('a'));
        assert!(!font.supports('中'));
        assert_eq!(font.width("中", Pt(10.0)), Pt(0.0));
        assert_eq!(font.width("a中b", Pt(10.0)), font.width("ab", Pt(10.0)));
    }

    #[test]
    fn normalizing_drops_what_the_face_cannot_draw() {
        let font = dejavu();
        assert_eq!(normalize_for("中文 abc", &font), "abc");
        assert_eq!(normalize_for("foo\n\tbar", &font), "foo bar");
        assert_eq!(lines_needed(&normalize_for("中文", &font), Pt(50.0), Pt(10.0), &font), 1);
    }

    #[test]
    fn vertical_metrics_come_from_the_face() {
        let font = dejavu();
        let size = Pt(10.0);
        let ascent = font.ascent(size);
        let descent = font.descent(size);
        let leading = font.leading(size);

        assert!(ascent > Pt(0.0));
        assert!(descent < Pt(0.0));
        assert!(leading >= Pt(0.0));
        assert_eq!(font.line_height(size), leading + ascent - descent);
        assert!(font.line_height(size) > size && font.line_height(size) < size * 2.0);
        // not the proportional fallback
        assert!((ascent.0 - 8.0).abs() > 1e-3);
    }
}
