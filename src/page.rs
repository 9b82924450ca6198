use crate::colour::Colour;
use crate::content::render_contents;
use crate::font::Font;
use crate::layout::Margins;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;
use crate::PDFError;
use id_arena::{Arena, Id};
use pdf_writer::{Content, Filter, Finish, Name, Pdf, Ref};

/// The font a span is set in
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpanFont {
    pub id: Id<Font>,
    pub size: Pt,
}

/// A single run of text on one baseline. `coords` is the start of the baseline in
/// PDF page space.
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub colour: Colour,
    pub coords: (Pt, Pt),
}

#[derive(Clone, PartialEq, Debug)]
pub enum PageContents {
    Text(Vec<SpanLayout>),
    RawContent(Vec<u8>),
}

/// A single page of a [Document](crate::Document)
#[derive(Debug)]
pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// Where content can live, i.e. within the margins
    pub content_box: Rect,
    pub contents: Vec<PageContents>,
}

impl Page {
    /// Create a new empty page of the given size. Without margins the content box
    /// covers the whole page.
    pub fn new(size: PageSize, margins: Option<Margins>) -> Page {
        let (width, height) = size;
        let margins = margins.unwrap_or_default();
        Page {
            media_box: Rect {
                x1: Pt(0.0),
                y1: Pt(0.0),
                x2: width,
                y2: height,
            },
            content_box: Rect {
                x1: margins.left,
                y1: margins.bottom,
                x2: width - margins.right,
                y2: height - margins.top,
            },
            contents: Vec::default(),
        }
    }

    pub fn width(&self) -> Pt {
        self.media_box.width()
    }

    pub fn height(&self) -> Pt {
        self.media_box.height()
    }

    /// Add several spans that share one text block in the content stream
    pub fn add_spans(&mut self, spans: Vec<SpanLayout>) {
        if !spans.is_empty() {
            self.contents.push(PageContents::Text(spans));
        }
    }

    /// Add arbitrary pdf_writer::Content (lines, rectangles, ...) to the page
    pub fn add_content(&mut self, content: Content) {
        self.contents.push(PageContents::RawContent(content.finish()));
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        fonts: &Arena<Font>,
        writer: &mut Pdf,
    ) -> Result<(), PDFError> {
        let id = refs.get(RefType::Page(page_index)).ok_or(PDFError::PageMissing)?;
        let parent = refs.get(RefType::PageTree).ok_or(PDFError::PageMissing)?;
        let font_refs: Vec<(usize, Ref)> = fonts
            .iter()
            .filter_map(|(font_id, _)| {
                refs.get(RefType::Font(font_id.index()))
                    .map(|r| (font_id.index(), r))
            })
            .collect();
        let content_id = refs.gen(RefType::ContentForPage(page_index));

        let mut page = writer.page(id);
        page.media_box(self.media_box.into());
        page.art_box(self.content_box.into());
        page.parent(parent);
        page.contents(content_id);

        let mut resources = page.resources();
        let mut resource_fonts = resources.fonts();
        for (i, font_ref) in font_refs {
            resource_fonts.pair(Name(format!("F{i}").as_bytes()), font_ref);
        }
        resource_fonts.finish();
        resources.finish();
        page.finish();

        let rendered = render_contents(&self.contents, fonts)?;
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
            &rendered,
            miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
        );
        writer
            .stream(content_id, &compressed)
            .filter(Filter::FlateDecode);

        Ok(())
    }
}
