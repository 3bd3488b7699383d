// src/editor.rs - Core editor coordinator

use crate::buffer::{Buffer, BufferError};
use crate::command::Command;
use crate::config::EnvyConfig;
use crate::cursor::Cursor;
use crate::keymap::{Key, key_to_command};
use crate::mode::Mode;
use crate::prompt::{Prompt, PromptContext, PromptKind, PromptOutcome, ViewSnapshot};
use crate::registers::Register;
use crate::search::SearchState;
use crate::status::{DEFAULT_MESSAGE_TIMEOUT, StatusMessage};
use crate::viewport::Viewport;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Rows taken by the status bar and the message bar
const CHROME_ROWS: usize = 2;
const DEFAULT_QUIT_TIMES: u32 = 2;

pub struct Editor {
    pub buffer: Buffer,
    pub cursor: Cursor,
    pub mode: Mode,
    pub viewport: Viewport,
    pub register: Register,
    pub prompt: Option<Prompt>,
    pub status_message: Option<StatusMessage>,
    message_timeout: Duration,
    quit_times: u32,
    quit_times_left: u32,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    pub fn new() -> Self {
        Self {
            buffer: Buffer::new(),
            cursor: Cursor::new(),
            mode: Mode::Normal,
            viewport: Viewport::new(20, 80),
            register: Register::new(),
            prompt: None,
            status_message: None,
            message_timeout: DEFAULT_MESSAGE_TIMEOUT,
            quit_times: DEFAULT_QUIT_TIMES,
            quit_times_left: DEFAULT_QUIT_TIMES,
        }
    }

    pub fn with_config(config: &EnvyConfig) -> Self {
        let quit_times = config.quit_times.max(1);
        Self {
            register: Register::with_capacity(config.register_capacity),
            message_timeout: config.message_timeout(),
            quit_times,
            quit_times_left: quit_times,
            ..Self::new()
        }
    }

    pub fn quit_times_left(&self) -> u32 {
        self.quit_times_left
    }

    /// Load `path` into the buffer and put the cursor at the top
    pub fn open_file(&mut self, path: &Path) -> Result<(), BufferError> {
        self.buffer.load_from_file(path)?;
        self.cursor = Cursor::new();
        self.viewport.offset_row = 0;
        self.viewport.offset_col = 0;
        Ok(())
    }

    /// Title an untitled buffer without reading anything from disk
    pub fn set_file_path(&mut self, path: &Path) {
        self.buffer.file_path = Some(path.to_path_buf());
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        let text = text.into();
        debug!("status: {}", text);
        self.status_message = Some(StatusMessage::new(text));
    }

    /// Line for the message bar: the live prompt, else an unexpired status message
    pub fn message_line(&self) -> Option<String> {
        if let Some(prompt) = &self.prompt {
            return Some(prompt.display());
        }
        self.status_message
            .as_ref()
            .and_then(|msg| msg.visible(self.message_timeout))
            .map(str::to_string)
    }

    pub fn handle_resize(&mut self, rows: u16, cols: u16) {
        self.viewport
            .resize((rows as usize).saturating_sub(CHROME_ROWS), cols as usize);
    }

    /// Recompute `rx` and the scroll offsets for the current cursor
    pub fn scroll(&mut self) {
        self.cursor.rx = match self.buffer.row(self.cursor.cy) {
            Some(row) => row.cx_to_rx(self.cursor.cx),
            None => 0,
        };
        self.viewport.scroll_to(self.cursor.cy, self.cursor.rx);
    }

    /// Process one keystroke. Returns true if the editor should exit.
    pub fn handle_key(&mut self, key: Key) -> bool {
        if self.prompt.is_some() {
            self.quit_times_left = self.quit_times;
            return self.handle_prompt_key(key);
        }

        match key_to_command(key, self.mode) {
            Some(cmd) => self.execute_command(cmd),
            None => {
                self.quit_times_left = self.quit_times;
                false
            }
        }
    }

    pub fn execute_command(&mut self, cmd: Command) -> bool {
        // Returns true if should quit
        if !cmd.is_quit() {
            self.quit_times_left = self.quit_times;
        }

        let quit = match cmd {
            Command::Quit => self.request_quit(),
            Command::ForceQuit => true,
            Command::MoveLeft => {
                if self.cursor.cx > 0 {
                    self.cursor.cx -= 1;
                }
                false
            }
            Command::MoveRight => {
                if self.cursor.cx < self.buffer.row_len(self.cursor.cy) {
                    self.cursor.cx += 1;
                }
                false
            }
            Command::MoveUp => {
                if self.cursor.cy > 0 {
                    self.cursor.cy -= 1;
                }
                self.clamp_cx();
                false
            }
            Command::MoveDown => {
                if self.cursor.cy < self.buffer.row_count() {
                    self.cursor.cy += 1;
                }
                self.clamp_cx();
                false
            }
            Command::MoveFileStart => {
                self.cursor.cy = 0;
                self.cursor.cx = 0;
                false
            }
            Command::MoveFileEnd => {
                self.cursor.cy = self.buffer.row_count().saturating_sub(1);
                self.cursor.cx = 0;
                false
            }
            Command::InsertMode => {
                self.mode = Mode::Insert;
                false
            }
            Command::OpenLineBelow => {
                let at = (self.cursor.cy + 1).min(self.buffer.row_count());
                self.open_line(at);
                false
            }
            Command::OpenLineAbove => {
                let at = self.cursor.cy.min(self.buffer.row_count());
                self.open_line(at);
                false
            }
            Command::NormalMode => {
                self.mode = Mode::Normal;
                false
            }
            Command::InsertChar(ch) => {
                self.insert_char(ch);
                false
            }
            Command::InsertNewline => {
                self.insert_newline();
                false
            }
            Command::DeleteChar => {
                self.delete_char();
                false
            }
            Command::DeleteRow => {
                self.delete_row(self.cursor.cy);
                self.clamp_cx();
                false
            }
            Command::YankRow => {
                self.yank_row();
                false
            }
            Command::PutRow => {
                self.put_row();
                false
            }
            Command::Find => {
                self.start_find();
                false
            }
            Command::SaveFile => self.save(false),
            Command::SaveAndQuit => self.save(true),
        };

        self.scroll();
        quit
    }

    /// Insert a byte at the cursor, creating a row first on the virtual row
    pub fn insert_char(&mut self, ch: u8) {
        if self.cursor.cy == self.buffer.row_count() {
            self.insert_row(self.cursor.cy, Vec::new());
        }
        self.buffer.row_insert_char(self.cursor.cy, self.cursor.cx, ch);
        self.cursor.cx += 1;
    }

    /// Split the current row at the cursor
    pub fn insert_newline(&mut self) {
        if self.cursor.cx == 0 {
            self.insert_row(self.cursor.cy, Vec::new());
        } else {
            let tail = self.buffer.row_split(self.cursor.cy, self.cursor.cx);
            self.insert_row(self.cursor.cy + 1, tail);
        }
        self.cursor.cy += 1;
        self.cursor.cx = 0;
    }

    /// Delete the byte before the cursor, joining rows at column 0
    pub fn delete_char(&mut self) {
        if self.cursor.cy >= self.buffer.row_count() {
            return;
        }
        if self.cursor.cx == 0 && self.cursor.cy == 0 {
            return;
        }

        if self.cursor.cx > 0 {
            self.buffer.row_delete_char(self.cursor.cy, self.cursor.cx - 1);
            self.cursor.cx -= 1;
        } else {
            let prev = self.cursor.cy - 1;
            let prev_len = self.buffer.row_len(prev);
            if let Some(row) = self.buffer.delete_row(self.cursor.cy) {
                self.buffer.row_append(prev, row.raw());
            }
            self.cursor.cx = prev_len;
            self.cursor.cy = prev;
        }
    }

    /// Remove row `at`. The cursor row is left as is and may now be the virtual row.
    pub fn delete_row(&mut self, at: usize) {
        self.buffer.delete_row(at);
    }

    fn insert_row(&mut self, at: usize, bytes: Vec<u8>) {
        if let Err(e) = self.buffer.insert_row(at, bytes) {
            warn!("insert_row failed: {}", e);
        }
    }

    fn open_line(&mut self, at: usize) {
        self.insert_row(at, Vec::new());
        self.cursor.cy = at;
        self.cursor.cx = 0;
        self.mode = Mode::Insert;
    }

    fn clamp_cx(&mut self) {
        let len = self.buffer.row_len(self.cursor.cy);
        if self.cursor.cx > len {
            self.cursor.cx = len;
        }
    }

    fn yank_row(&mut self) {
        let Some(row) = self.buffer.row(self.cursor.cy).cloned() else {
            return;
        };
        match self.register.push(row) {
            Ok(()) => {
                let depth = self.register.len();
                self.set_status(format!("Yanked row ({} in register)", depth));
            }
            Err(e) => self.set_status(format!("Can't yank: {}", e)),
        }
    }

    fn put_row(&mut self) {
        let Some(row) = self.register.pop() else {
            self.set_status("Register is empty");
            return;
        };
        let at = (self.cursor.cy + 1).min(self.buffer.row_count());
        if let Err(e) = self.buffer.insert_row_copy(at, row) {
            warn!("put_row failed: {}", e);
        }
    }

    fn request_quit(&mut self) -> bool {
        if !self.buffer.is_dirty() {
            return true;
        }
        self.quit_times_left = self.quit_times_left.saturating_sub(1);
        if self.quit_times_left == 0 {
            info!("quitting with unsaved changes");
            return true;
        }
        let left = self.quit_times_left;
        self.set_status(format!(
            "WARNING!!! File has unsaved changes. Press q {} more time{} to quit, or Q to force quit.",
            left,
            if left == 1 { "" } else { "s" }
        ));
        false
    }

    fn save(&mut self, then_quit: bool) -> bool {
        match self.buffer.file_path.clone() {
            Some(path) => self.write_to(&path) && then_quit,
            None => {
                self.start_prompt(PromptKind::SaveAs { then_quit });
                false
            }
        }
    }

    fn write_to(&mut self, path: &Path) -> bool {
        match self.buffer.save_to_file(path) {
            Ok(bytes) => {
                info!("saved {}", path.display());
                self.set_status(format!("{} bytes written to disk", bytes));
                true
            }
            Err(e) => {
                warn!("save to {} failed: {}", path.display(), e);
                self.set_status(format!("Can't save! {}", e));
                false
            }
        }
    }

    fn start_prompt(&mut self, kind: PromptKind) {
        let snapshot = ViewSnapshot::capture(&self.cursor, &self.viewport);
        let prompt = Prompt::new(kind, snapshot);
        self.prompt = Some(match kind {
            PromptKind::Find => prompt.with_callback(Box::new(SearchState::new())),
            PromptKind::SaveAs { .. } => prompt,
        });
    }

    fn start_find(&mut self) {
        self.start_prompt(PromptKind::Find);
    }

    fn handle_prompt_key(&mut self, key: Key) -> bool {
        let Some(prompt) = self.prompt.as_mut() else {
            return false;
        };
        let outcome = prompt.handle_key(
            key,
            PromptContext {
                buffer: &self.buffer,
                cursor: &mut self.cursor,
                viewport: &mut self.viewport,
            },
        );

        let quit = match outcome {
            PromptOutcome::Pending => false,
            PromptOutcome::Submitted(input) => match self.prompt.take() {
                Some(prompt) => self.submit_prompt(prompt.kind(), input),
                None => false,
            },
            PromptOutcome::Cancelled => {
                if let Some(prompt) = self.prompt.take() {
                    self.cancel_prompt(&prompt);
                }
                false
            }
        };

        self.scroll();
        quit
    }

    fn submit_prompt(&mut self, kind: PromptKind, input: Vec<u8>) -> bool {
        match kind {
            PromptKind::SaveAs { then_quit } => {
                let path = PathBuf::from(String::from_utf8_lossy(&input).into_owned());
                self.buffer.file_path = Some(path.clone());
                self.write_to(&path) && then_quit
            }
            PromptKind::Find => {
                debug!("search confirmed at row {}", self.cursor.cy);
                false
            }
        }
    }

    fn cancel_prompt(&mut self, prompt: &Prompt) {
        match prompt.kind() {
            PromptKind::SaveAs { .. } => self.set_status("Save aborted"),
            PromptKind::Find => prompt
                .snapshot()
                .restore(&mut self.cursor, &mut self.viewport),
        }
    }
}
