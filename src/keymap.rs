// src/keymap.rs - Key decoding and per-mode key bindings

use crate::command::Command;
use crate::mode::Mode;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A decoded keystroke in the editor's byte model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(u8),
    Enter,
    Backspace,
    Delete,
    Escape,
    Up,
    Down,
    Left,
    Right,
}

impl Key {
    /// Decode a crossterm key event.
    ///
    /// Non-ASCII characters, key releases and keys the editor has no use for
    /// yield `None`. Control chords are dropped so they never insert text.
    pub fn from_event(event: KeyEvent) -> Option<Key> {
        if event.kind == KeyEventKind::Release {
            return None;
        }
        match event.code {
            KeyCode::Char(_) if event.modifiers.contains(KeyModifiers::CONTROL) => None,
            KeyCode::Char(c) if c.is_ascii() => Some(Key::Char(c as u8)),
            KeyCode::Tab => Some(Key::Char(b'\t')),
            KeyCode::Enter => Some(Key::Enter),
            KeyCode::Backspace => Some(Key::Backspace),
            KeyCode::Delete => Some(Key::Delete),
            KeyCode::Esc => Some(Key::Escape),
            KeyCode::Up => Some(Key::Up),
            KeyCode::Down => Some(Key::Down),
            KeyCode::Left => Some(Key::Left),
            KeyCode::Right => Some(Key::Right),
            _ => None,
        }
    }

    /// Printable bytes that may be typed into a row (tab included)
    pub fn insertable(&self) -> Option<u8> {
        match *self {
            Key::Char(b) if b == b'\t' || (b' '..=b'~').contains(&b) => Some(b),
            _ => None,
        }
    }
}

/// Map a key to the command it triggers in `mode`
pub fn key_to_command(key: Key, mode: Mode) -> Option<Command> {
    match mode {
        Mode::Normal => match key {
            Key::Left | Key::Char(b'h') => Some(Command::MoveLeft),
            Key::Down | Key::Char(b'j') => Some(Command::MoveDown),
            Key::Up | Key::Char(b'k') => Some(Command::MoveUp),
            Key::Right | Key::Char(b'l') => Some(Command::MoveRight),
            Key::Char(b'i') => Some(Command::InsertMode),
            Key::Char(b'o') => Some(Command::OpenLineBelow),
            Key::Char(b'O') => Some(Command::OpenLineAbove),
            Key::Char(b'd') => Some(Command::DeleteRow),
            Key::Char(b'y') => Some(Command::YankRow),
            Key::Char(b'p') => Some(Command::PutRow),
            Key::Char(b'g') => Some(Command::MoveFileStart),
            Key::Char(b'G') => Some(Command::MoveFileEnd),
            Key::Char(b'/') => Some(Command::Find),
            Key::Char(b'w') => Some(Command::SaveFile),
            Key::Char(b'z') => Some(Command::SaveAndQuit),
            Key::Char(b'q') => Some(Command::Quit),
            Key::Char(b'Q') => Some(Command::ForceQuit),
            _ => None,
        },
        Mode::Insert => match key {
            Key::Escape => Some(Command::NormalMode),
            Key::Enter => Some(Command::InsertNewline),
            Key::Backspace => Some(Command::DeleteChar),
            Key::Left => Some(Command::MoveLeft),
            Key::Right => Some(Command::MoveRight),
            Key::Up => Some(Command::MoveUp),
            Key::Down => Some(Command::MoveDown),
            other => other.insertable().map(Command::InsertChar),
        },
    }
}
