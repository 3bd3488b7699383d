/// Visible window onto the buffer, in rendered coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    pub offset_row: usize,
    pub offset_col: usize,
    pub rows: usize,
    pub cols: usize,
    /// Set when a jump (e.g. a search hit) should put the cursor row at the top
    force_reposition: bool,
}

impl Viewport {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            offset_row: 0,
            offset_col: 0,
            rows,
            cols,
            force_reposition: false,
        }
    }

    /// Make the next `scroll_to` place the cursor row at the top of the window
    pub fn request_reposition(&mut self) {
        self.force_reposition = true;
    }

    /// Shift the offsets the minimum amount needed to keep `(row, rx)` visible.
    pub fn scroll_to(&mut self, row: usize, rx: usize) {
        let rows = self.rows.max(1);
        let cols = self.cols.max(1);

        if self.force_reposition {
            self.offset_row = row;
            self.force_reposition = false;
        }

        if row < self.offset_row {
            self.offset_row = row;
        }
        if row >= self.offset_row + rows {
            self.offset_row = row - rows + 1;
        }
        if rx < self.offset_col {
            self.offset_col = rx;
        }
        if rx >= self.offset_col + cols {
            self.offset_col = rx - cols + 1;
        }
    }

    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_viewport_new() {
        let viewport = Viewport::new(10, 20);
        assert_eq!(viewport.offset_row, 0);
        assert_eq!(viewport.offset_col, 0);
        assert_eq!(viewport.rows, 10);
        assert_eq!(viewport.cols, 20);
        assert!(!viewport.force_reposition);
    }

    #[test]
    fn test_scroll_within_viewport_is_noop() {
        let mut viewport = Viewport::new(10, 20);
        viewport.scroll_to(7, 10);
        assert_eq!(viewport.offset_row, 0);
        assert_eq!(viewport.offset_col, 0);
    }

    #[test]
    fn test_scroll_below() {
        let mut viewport = Viewport::new(10, 20);
        viewport.scroll_to(15, 0);
        assert_eq!(viewport.offset_row, 6);
    }

    #[test]
    fn test_scroll_above() {
        let mut viewport = Viewport::new(10, 20);
        viewport.offset_row = 12;
        viewport.scroll_to(4, 0);
        assert_eq!(viewport.offset_row, 4);
    }

    #[test]
    fn test_scroll_right_then_left() {
        let mut viewport = Viewport::new(10, 20);
        viewport.scroll_to(0, 25);
        assert_eq!(viewport.offset_col, 6);
        viewport.scroll_to(0, 3);
        assert_eq!(viewport.offset_col, 3);
    }

    #[test]
    fn test_reposition_puts_row_at_top() {
        let mut viewport = Viewport::new(10, 20);
        viewport.scroll_to(5, 0);
        assert_eq!(viewport.offset_row, 0);

        viewport.request_reposition();
        viewport.scroll_to(5, 0);
        assert_eq!(viewport.offset_row, 5);
        assert!(!viewport.force_reposition);

        // Subsequent scrolls keep the offset
        viewport.scroll_to(6, 0);
        assert_eq!(viewport.offset_row, 5);
    }

    #[test]
    fn test_zero_sized_viewport_does_not_underflow() {
        let mut viewport = Viewport::new(0, 0);
        viewport.scroll_to(3, 7);
        assert_eq!(viewport.offset_row, 3);
        assert_eq!(viewport.offset_col, 7);
    }

    proptest! {
        #[test]
        fn cursor_stays_visible(
            rows in 1..100usize,
            cols in 1..100usize,
            start_row in 0..200usize,
            start_col in 0..200usize,
            row in 0..200usize,
            rx in 0..200usize,
            reposition in any::<bool>(),
        ) {
            let mut viewport = Viewport::new(rows, cols);
            viewport.offset_row = start_row;
            viewport.offset_col = start_col;
            if reposition {
                viewport.request_reposition();
            }
            viewport.scroll_to(row, rx);

            prop_assert!(row >= viewport.offset_row && row < viewport.offset_row + viewport.rows);
            prop_assert!(rx >= viewport.offset_col && rx < viewport.offset_col + viewport.cols);
        }
    }
}
