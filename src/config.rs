use crate::layout::RowHeightModel;
use crate::units::{Mm, Pt};

/// Options controlling how a [Table](crate::Table) is laid out on pages.
///
/// Column widths are not part of the configuration; they travel with the table's
/// columns (see [Table::from_records](crate::Table::from_records)).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TableConfig {
    /// Size of body text. Affects both width and line estimates.
    pub font_size: Pt,
    /// Size of header text
    pub header_font_size: Pt,
    /// Vertical space for body rows on each page, excluding margins and the header
    pub page_capacity: Pt,
    /// Distance of the table from the top and left edges of the page
    pub page_margin: Pt,
    /// Vertical space added to every cell on top of its text
    pub cell_padding: Pt,
    pub height_model: RowHeightModel,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            font_size: Pt(10.0),
            header_font_size: Pt(12.0),
            page_capacity: Mm(160.0).into(),
            page_margin: Mm(10.0).into(),
            cell_padding: Mm(2.0).into(),
            height_model: RowHeightModel::Lines,
        }
    }
}

impl TableConfig {
    /// Create a configuration with the default options
    pub fn new() -> TableConfig {
        TableConfig::default()
    }

    /// Set the body font size, modifying `self`
    pub fn font_size<P: Into<Pt>>(&mut self, size: P) -> &mut Self {
        self.font_size = size.into();
        self
    }

    /// Set the header font size, modifying `self`
    pub fn header_font_size<P: Into<Pt>>(&mut self, size: P) -> &mut Self {
        self.header_font_size = size.into();
        self
    }

    /// Set how much vertical room body rows get on each page, modifying `self`
    pub fn page_capacity<P: Into<Pt>>(&mut self, capacity: P) -> &mut Self {
        self.page_capacity = capacity.into();
        self
    }

    /// Set the page margin, modifying `self`
    pub fn page_margin<P: Into<Pt>>(&mut self, margin: P) -> &mut Self {
        self.page_margin = margin.into();
        self
    }

    /// Set the vertical cell padding, modifying `self`
    pub fn cell_padding<P: Into<Pt>>(&mut self, padding: P) -> &mut Self {
        self.cell_padding = padding.into();
        self
    }

    /// Set how cell heights are estimated, modifying `self`
    pub fn height_model(&mut self, model: RowHeightModel) -> &mut Self {
        self.height_model = model;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::In;

    #[test]
    fn setters_chain_and_convert_units() {
        let config = *TableConfig::new()
            .font_size(Pt(9.0))
            .header_font_size(Pt(11.0))
            .page_capacity(In(7.0))
            .page_margin(Mm(0.0))
            .cell_padding(Pt(1.5))
            .height_model(RowHeightModel::TextDensity);

        assert_eq!(config.font_size, Pt(9.0));
        assert_eq!(config.header_font_size, Pt(11.0));
        assert_eq!(config.page_capacity, Pt(504.0));
        assert_eq!(config.page_margin, Pt(0.0));
        assert_eq!(config.cell_padding, Pt(1.5));
        assert_eq!(config.height_model, RowHeightModel::TextDensity);
    }

    #[test]
    fn defaults_match_new() {
        assert_eq!(TableConfig::new(), TableConfig::default());
        assert_eq!(TableConfig::default().height_model, RowHeightModel::Lines);
    }
}
