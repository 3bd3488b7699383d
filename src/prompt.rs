// src/prompt.rs - Single-line input prompt shown in the message bar

use crate::buffer::Buffer;
use crate::cursor::Cursor;
use crate::keymap::Key;
use crate::viewport::Viewport;

/// What the typed text will be used for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// File name for an untitled buffer, optionally quitting after the write
    SaveAs { then_quit: bool },
    Find,
}

impl PromptKind {
    fn template(&self) -> (&'static str, &'static str) {
        match self {
            PromptKind::SaveAs { .. } => ("Save as", "ESC to cancel"),
            PromptKind::Find => ("Search", "Use ESC/Arrows/Enter"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    /// Still collecting input
    Pending,
    Submitted(Vec<u8>),
    Cancelled,
}

/// Cursor and scroll position captured when a prompt opens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewSnapshot {
    pub cursor: Cursor,
    pub offset_row: usize,
    pub offset_col: usize,
}

impl ViewSnapshot {
    pub fn capture(cursor: &Cursor, viewport: &Viewport) -> Self {
        Self {
            cursor: *cursor,
            offset_row: viewport.offset_row,
            offset_col: viewport.offset_col,
        }
    }

    pub fn restore(&self, cursor: &mut Cursor, viewport: &mut Viewport) {
        *cursor = self.cursor;
        viewport.offset_row = self.offset_row;
        viewport.offset_col = self.offset_col;
    }
}

/// The parts of the editor a prompt callback may look at or move
pub struct PromptContext<'a> {
    pub buffer: &'a Buffer,
    pub cursor: &'a mut Cursor,
    pub viewport: &'a mut Viewport,
}

/// Live hook run after every keystroke typed into a prompt
pub trait PromptCallback: std::fmt::Debug {
    fn on_key(&mut self, ctx: PromptContext<'_>, input: &[u8], key: Key);
}

#[derive(Debug)]
pub struct Prompt {
    kind: PromptKind,
    input: Vec<u8>,
    snapshot: ViewSnapshot,
    callback: Option<Box<dyn PromptCallback>>,
}

impl Prompt {
    pub fn new(kind: PromptKind, snapshot: ViewSnapshot) -> Self {
        Self {
            kind,
            input: Vec::new(),
            snapshot,
            callback: None,
        }
    }

    pub fn with_callback(mut self, callback: Box<dyn PromptCallback>) -> Self {
        self.callback = Some(callback);
        self
    }

    pub fn kind(&self) -> PromptKind {
        self.kind
    }

    pub fn snapshot(&self) -> &ViewSnapshot {
        &self.snapshot
    }

    /// Feed one keystroke. Enter on an empty line is ignored.
    pub fn handle_key(&mut self, key: Key, ctx: PromptContext<'_>) -> PromptOutcome {
        let outcome = match key {
            Key::Backspace | Key::Delete => {
                self.input.pop();
                PromptOutcome::Pending
            }
            Key::Escape => PromptOutcome::Cancelled,
            Key::Enter if !self.input.is_empty() => PromptOutcome::Submitted(self.input.clone()),
            Key::Char(b) if (b' '..=b'~').contains(&b) => {
                self.input.push(b);
                PromptOutcome::Pending
            }
            _ => PromptOutcome::Pending,
        };

        if let Some(callback) = self.callback.as_mut() {
            callback.on_key(ctx, &self.input, key);
        }

        outcome
    }

    /// Text for the message bar, e.g. `Search: foo (Use ESC/Arrows/Enter)`
    pub fn display(&self) -> String {
        let (label, hint) = self.kind.template();
        format!(
            "{}: {} ({})",
            label,
            String::from_utf8_lossy(&self.input),
            hint
        )
    }
}
