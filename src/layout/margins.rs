use crate::units::Pt;

/// Margins around the content of a page. Nothing stops content from spilling into
/// them; they only determine the `ArtBox` written for each [`Page`](crate::Page).
/// Where the table starts is set by
/// [TableConfig::page_margin](crate::TableConfig::page_margin).
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Margins {
    pub top: Pt,
    pub right: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl Margins {
    /// Create margins clockwise from the top, in the same order as CSS margins
    pub fn trbl(top: Pt, right: Pt, bottom: Pt, left: Pt) -> Margins {
        Margins {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create margins where all values are equal
    pub fn all<D: Into<Pt>>(value: D) -> Margins {
        let value: Pt = value.into();
        Margins::trbl(value, value, value, value)
    }
}
