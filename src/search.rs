// src/search.rs - Incremental literal search driven by the find prompt

use crate::buffer::Buffer;
use crate::keymap::Key;
use crate::prompt::{PromptCallback, PromptContext};
use log::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

/// Where the last hit was and which way to look next
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub last_match: Option<usize>,
    pub direction: Direction,
}

/// A hit: row index and byte offset into that row's rendered form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub row: usize,
    pub render_offset: usize,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.last_match = None;
        self.direction = Direction::Forward;
    }

    /// Scan for `query`, starting one row past the last hit in the current
    /// direction and wrapping around the buffer at most once.
    pub fn find_next(&mut self, buffer: &Buffer, query: &[u8]) -> Option<Match> {
        let total = buffer.row_count();
        if query.is_empty() || total == 0 {
            return None;
        }
        if self.last_match.is_none() {
            self.direction = Direction::Forward;
        }

        let mut current = self.last_match;
        for _ in 0..total {
            let next = match (current, self.direction) {
                (None, Direction::Forward) => 0,
                (None, Direction::Backward) => total - 1,
                (Some(i), Direction::Forward) => (i + 1) % total,
                (Some(i), Direction::Backward) => {
                    if i == 0 || i > total {
                        total - 1
                    } else {
                        i - 1
                    }
                }
            };
            current = Some(next);

            if let Some(offset) = buffer.row(next).and_then(|r| r.find_in_render(query)) {
                self.last_match = Some(next);
                return Some(Match {
                    row: next,
                    render_offset: offset,
                });
            }
        }

        None
    }
}

impl PromptCallback for SearchState {
    fn on_key(&mut self, ctx: PromptContext<'_>, input: &[u8], key: Key) {
        match key {
            Key::Enter | Key::Escape => {
                self.reset();
                return;
            }
            Key::Down => self.direction = Direction::Forward,
            Key::Up => self.direction = Direction::Backward,
            _ => self.reset(),
        }

        if let Some(hit) = self.find_next(ctx.buffer, input) {
            trace!("search hit at row {} offset {}", hit.row, hit.render_offset);
            ctx.cursor.cy = hit.row;
            ctx.cursor.cx = ctx
                .buffer
                .row(hit.row)
                .map_or(0, |r| r.rx_to_cx(hit.render_offset));
            ctx.viewport.request_reposition();
        }
    }
}
