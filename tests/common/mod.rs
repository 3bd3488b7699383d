// Common test utilities for driving the editor through keystrokes

use envy::editor::Editor;
use envy::keymap::Key;

/// Create an editor holding `lines`, cursor at the top
#[allow(dead_code)]
pub fn editor_with_lines(lines: &[&str]) -> Editor {
    let mut editor = Editor::new();
    editor.buffer = envy::buffer::Buffer::from_lines(lines.iter().copied());
    editor
}

/// Feed every byte of `text` as a character key. Returns true if any key asked to quit.
#[allow(dead_code)]
pub fn type_str(editor: &mut Editor, text: &str) -> bool {
    text.bytes()
        .map(|b| editor.handle_key(Key::Char(b)))
        .fold(false, |quit, q| quit || q)
}

/// Feed a sequence of keys, stopping at the first one that asks to quit
#[allow(dead_code)]
pub fn press(editor: &mut Editor, keys: &[Key]) -> bool {
    keys.iter().any(|&key| editor.handle_key(key))
}

/// Raw contents of every row, lossily decoded
#[allow(dead_code)]
pub fn lines(editor: &Editor) -> Vec<String> {
    editor
        .buffer
        .rows()
        .iter()
        .map(|row| String::from_utf8_lossy(row.raw()).into_owned())
        .collect()
}

/// Validation helpers for cursor and viewport state
pub mod validation {
    use super::*;

    /// Assert cursor is within the buffer, allowing the virtual row past the end
    #[allow(dead_code)]
    pub fn assert_cursor_valid(editor: &Editor) {
        let rows = editor.buffer.row_count();
        assert!(
            editor.cursor.cy <= rows,
            "Cursor row {} exceeds row count {}",
            editor.cursor.cy,
            rows
        );
        let len = editor.buffer.row_len(editor.cursor.cy);
        assert!(
            editor.cursor.cx <= len,
            "Cursor col {} exceeds row length {} on row {}",
            editor.cursor.cx,
            len,
            editor.cursor.cy
        );
    }

    /// Assert the cursor lies inside the visible window after a scroll
    #[allow(dead_code)]
    pub fn assert_cursor_visible(editor: &Editor) {
        let vp = &editor.viewport;
        assert!(editor.cursor.cy >= vp.offset_row);
        assert!(editor.cursor.cy < vp.offset_row + vp.rows.max(1));
        assert!(editor.cursor.rx >= vp.offset_col);
        assert!(editor.cursor.rx < vp.offset_col + vp.cols.max(1));
    }
}
