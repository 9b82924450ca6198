use crate::units::Pt;

/// Where the next row goes on the current page. All values are measured from the
/// top-left corner of the page, with `y` growing down the page.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PageState {
    /// Top of the next row
    pub current_y: Pt,
    /// Vertical space available for body rows on one page, not counting the header
    pub page_capacity: Pt,
    pub x_origin: Pt,
    pub y_origin: Pt,
}

/// Whether the next row can go on the current page
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CursorState {
    Accepting,
    Overflow,
}

/// The outcome of [PageCursor::advance]
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Advance {
    /// The row fits on the current page, with its top at `y`
    Placed { y: Pt },
    /// The previous page is finished. Page `page` starts with the header at
    /// `header_y`; the row goes at `y` right below it.
    NewPage { page: usize, header_y: Pt, y: Pt },
}

/// Hands out vertical positions for rows, one page at a time.
///
/// A cursor is created after the first header has been placed. Each call to
/// [advance](PageCursor::advance) either accepts the row on the current page or
/// moves to a new page first. A page that has no body rows yet accepts any row,
/// however tall, so a row that cannot fit on any page ends up alone on one rather
/// than triggering breaks forever.
#[derive(Debug, Clone)]
pub struct PageCursor {
    state: PageState,
    page: usize,
    body_top: Pt,
    header_height: Pt,
    rows_on_page: usize,
}

impl PageCursor {
    pub fn new(x_origin: Pt, y_origin: Pt, page_capacity: Pt, header_height: Pt) -> PageCursor {
        let body_top = y_origin + header_height;
        PageCursor {
            state: PageState {
                current_y: body_top,
                page_capacity,
                x_origin,
                y_origin,
            },
            page: 0,
            body_top,
            header_height,
            rows_on_page: 0,
        }
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    /// 0-based index of the current page
    pub fn page(&self) -> usize {
        self.page
    }

    /// Height taken up by body rows on the current page
    pub fn used(&self) -> Pt {
        self.state.current_y - self.body_top
    }

    pub fn check(&self, row_height: Pt) -> CursorState {
        if self.rows_on_page == 0 || self.used() + row_height <= self.state.page_capacity {
            CursorState::Accepting
        } else {
            CursorState::Overflow
        }
    }

    /// Reserve `row_height` for the next row, breaking onto a new page (and making
    /// room for the header at its top) when the current one is full.
    pub fn advance(&mut self, row_height: Pt) -> Advance {
        let advance = match self.check(row_height) {
            CursorState::Accepting => Advance::Placed {
                y: self.state.current_y,
            },
            CursorState::Overflow => {
                tracing::debug!(
                    page = self.page,
                    used = self.used().0,
                    rows = self.rows_on_page,
                    "page full, starting a new one"
                );
                self.page += 1;
                self.state.current_y = self.state.y_origin;
                let header_y = self.state.current_y;
                self.state.current_y += self.header_height;
                self.body_top = self.state.current_y;
                self.rows_on_page = 0;
                Advance::NewPage {
                    page: self.page,
                    header_y,
                    y: self.state.current_y,
                }
            }
        };

        if row_height > self.state.page_capacity {
            tracing::warn!(
                page = self.page,
                row_height = row_height.0,
                capacity = self.state.page_capacity.0,
                "row is taller than a page, placing it on its own"
            );
        }

        self.state.current_y += row_height;
        self.rows_on_page += 1;
        advance
    }

    /// Number of pages used so far, including the current one
    pub fn page_count(&self) -> usize {
        self.page + 1
    }

    /// Height reserved for the header at the top of every page
    pub fn header_height(&self) -> Pt {
        self.header_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor() -> PageCursor {
        PageCursor::new(Pt(10.0), Pt(20.0), Pt(100.0), Pt(15.0))
    }

    #[test]
    fn starts_below_the_first_header() {
        let cursor = cursor();
        assert_eq!(cursor.state().current_y, Pt(35.0));
        assert_eq!(cursor.used(), Pt(0.0));
        assert_eq!(cursor.page(), 0);
    }

    #[test]
    fn accepts_rows_up_to_capacity() {
        let mut cursor = cursor();
        assert_eq!(cursor.advance(Pt(60.0)), Advance::Placed { y: Pt(35.0) });
        assert_eq!(cursor.advance(Pt(40.0)), Advance::Placed { y: Pt(95.0) });
        assert_eq!(cursor.used(), Pt(100.0));
        assert_eq!(cursor.check(Pt(0.5)), CursorState::Overflow);
    }

    #[test]
    fn breaks_and_reserves_room_for_the_header() {
        let mut cursor = cursor();
        cursor.advance(Pt(60.0));
        assert_eq!(cursor.check(Pt(50.0)), CursorState::Overflow);
        assert_eq!(
            cursor.advance(Pt(50.0)),
            Advance::NewPage {
                page: 1,
                header_y: Pt(20.0),
                y: Pt(35.0)
            }
        );
        assert_eq!(cursor.used(), Pt(50.0));
        assert_eq!(cursor.page_count(), 2);
    }

    #[test]
    fn places_oversized_rows_alone() {
        let mut cursor = cursor();
        // fits on the empty first page even though it is too tall
        assert_eq!(cursor.advance(Pt(250.0)), Advance::Placed { y: Pt(35.0) });
        // anything after it goes to the next page
        assert!(matches!(
            cursor.advance(Pt(10.0)),
            Advance::NewPage { page: 1, .. }
        ));
        // and another oversized row breaks once, then stays put
        assert!(matches!(
            cursor.advance(Pt(250.0)),
            Advance::NewPage { page: 2, .. }
        ));
        assert_eq!(cursor.page_count(), 3);
    }

    #[test]
    fn every_page_reserves_the_same_header() {
        let mut cursor = cursor();
        assert_eq!(cursor.header_height(), Pt(15.0));
        cursor.advance(Pt(90.0));
        for page in 1..4 {
            cursor.advance(Pt(90.0));
            let body_top = cursor.state().current_y - Pt(90.0);
            assert_eq!(body_top, Pt(35.0), "page {page}");
            assert_eq!(body_top - cursor.state().y_origin, cursor.header_height());
        }
    }
}
