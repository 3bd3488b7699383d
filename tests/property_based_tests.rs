// Property-based tests using proptest
// Random buffers and key sequences to find edge cases unit tests miss

mod common;
use common::validation;

use envy::buffer::Buffer;
use envy::editor::Editor;
use envy::keymap::Key;
use proptest::prelude::*;
use tempfile::TempDir;

fn line_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z \t]{0,12}", 0..8)
}

/// Keys that never leave the editor or write to disk
fn key_strategy() -> impl Strategy<Value = Key> {
    prop_oneof![
        prop::sample::select(b"hjklioOdypgG/ax \t".to_vec()).prop_map(Key::Char),
        Just(Key::Enter),
        Just(Key::Backspace),
        Just(Key::Escape),
        Just(Key::Up),
        Just(Key::Down),
        Just(Key::Left),
        Just(Key::Right),
    ]
}

// Property: serialize then reload yields the same rows
proptest! {
    #[test]
    fn serialize_then_load_preserves_rows(lines in line_strategy()) {
        let buffer = Buffer::from_lines(lines.iter().map(String::as_str));
        let reloaded = Buffer::from_bytes(&buffer.serialize());
        prop_assert_eq!(reloaded.row_count(), buffer.row_count());
        for (a, b) in reloaded.rows().iter().zip(buffer.rows()) {
            prop_assert_eq!(a.raw(), b.raw());
        }
    }
}

// Property: saving to disk and opening again gives back the same rows
proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]
    #[test]
    fn save_then_open_preserves_rows(lines in line_strategy()) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("round.txt");

        let mut buffer = Buffer::from_lines(lines.iter().map(String::as_str));
        buffer.save_to_file(&path).unwrap();

        let mut editor = Editor::new();
        editor.open_file(&path).unwrap();
        prop_assert_eq!(editor.buffer.rows(), buffer.rows());
        prop_assert!(!editor.buffer.is_dirty());
    }
}

// Property: splitting a row and appending the tail back restores it
proptest! {
    #[test]
    fn split_then_join_restores_row(line in "[a-z\t ]{0,20}", at in 0usize..25) {
        let mut buffer = Buffer::from_lines([line.as_str()]);
        let at = at.min(line.len());
        let tail = buffer.row_split(0, at);
        prop_assert_eq!(buffer.row_len(0), at);
        buffer.row_append(0, &tail);
        prop_assert_eq!(buffer.row(0).unwrap().raw(), line.as_bytes());
    }
}

// Property: Enter then Backspace at the same spot is a no-op on the text
proptest! {
    #[test]
    fn newline_then_backspace_is_identity(lines in prop::collection::vec("[a-z]{1,10}", 1..5), row in 0usize..5, col in 0usize..12) {
        let mut editor = Editor::new();
        editor.buffer = Buffer::from_lines(lines.iter().map(String::as_str));
        editor.cursor.cy = row.min(lines.len() - 1);
        editor.cursor.cx = col.min(lines[editor.cursor.cy].len());
        let before = editor.buffer.serialize();

        editor.insert_newline();
        editor.delete_char();

        prop_assert_eq!(editor.buffer.serialize(), before);
    }
}

// Property: no key sequence can push the cursor outside the buffer or the window
proptest! {
    #[test]
    fn random_keys_keep_cursor_valid(
        lines in line_strategy(),
        keys in prop::collection::vec(key_strategy(), 0..60),
    ) {
        let mut editor = Editor::new();
        editor.buffer = Buffer::from_lines(lines.iter().map(String::as_str));
        editor.handle_resize(8, 10);

        for key in keys {
            prop_assert!(!editor.handle_key(key));
            validation::assert_cursor_valid(&editor);
            validation::assert_cursor_visible(&editor);
        }
    }
}
