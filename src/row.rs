// src/row.rs - A single line of text and its rendered form

use crate::coords;

/// One line of the buffer.
///
/// `render` is derived from `raw` and is rebuilt by every mutating method,
/// so it is never stale when read.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    raw: Vec<u8>,
    render: Vec<u8>,
}

impl Row {
    pub fn new(raw: impl Into<Vec<u8>>) -> Self {
        let mut row = Self {
            raw: raw.into(),
            render: Vec::new(),
        };
        row.update_render();
        row
    }

    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    pub fn render(&self) -> &[u8] {
        &self.render
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Rebuild the rendered form from the raw bytes
    pub fn update_render(&mut self) {
        self.render = coords::expand_tabs(&self.raw);
    }

    /// Insert `byte` at `at`, clamping `at` to the row length
    pub fn insert_byte(&mut self, at: usize, byte: u8) {
        let at = at.min(self.raw.len());
        self.raw.insert(at, byte);
        self.update_render();
    }

    /// Remove the byte at `at`. Returns false when `at` is out of range.
    pub fn delete_byte(&mut self, at: usize) -> bool {
        if at >= self.raw.len() {
            return false;
        }
        self.raw.remove(at);
        self.update_render();
        true
    }

    pub fn append(&mut self, bytes: &[u8]) {
        self.raw.extend_from_slice(bytes);
        self.update_render();
    }

    /// Cut the row at `at`, keeping `[0, at)` and returning the rest
    pub fn split_off(&mut self, at: usize) -> Vec<u8> {
        let at = at.min(self.raw.len());
        let tail = self.raw.split_off(at);
        self.update_render();
        tail
    }

    pub fn cx_to_rx(&self, cx: usize) -> usize {
        coords::cx_to_rx(&self.raw, cx)
    }

    pub fn rx_to_cx(&self, rx: usize) -> usize {
        coords::rx_to_cx(&self.raw, rx)
    }

    /// Byte offset of the first occurrence of `needle` in the rendered form
    pub fn find_in_render(&self, needle: &[u8]) -> Option<usize> {
        if needle.is_empty() || needle.len() > self.render.len() {
            return None;
        }
        self.render
            .windows(needle.len())
            .position(|window| window == needle)
    }
}
