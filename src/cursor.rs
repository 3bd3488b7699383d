/// Cursor position in buffer coordinates.
///
/// `cx` is a raw byte column, `cy` a row index (equal to the row count on the
/// virtual row past the end), and `rx` the rendered column derived from `cx`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub cx: usize,
    pub cy: usize,
    pub rx: usize,
}

impl Cursor {
    pub fn new() -> Self {
        Self { cx: 0, cy: 0, rx: 0 }
    }

    pub fn at(cy: usize, cx: usize) -> Self {
        Self { cx, cy, rx: 0 }
    }
}
