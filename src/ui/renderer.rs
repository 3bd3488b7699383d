// ui/renderer.rs - Ratatui-based renderer for the text editor

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
};
use std::io::Stdout;

use crate::editor::Editor;
use crate::ui::theme::Theme;
use crate::ui::widgets::editor_pane::EditorPane;
use crate::ui::widgets::message_bar::MessageBar;
use crate::ui::widgets::status_bar::StatusBar;

/// Ratatui-based renderer for the text editor
pub struct TuiRenderer {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    theme: Theme,
}

/// Text area, status bar and message bar for a frame of size `size`
pub fn split_screen(size: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Text
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Message bar
        ])
        .split(size);
    (chunks[0], chunks[1], chunks[2])
}

/// Screen position of the cursor inside `text_area`, if it is visible
pub fn cursor_position(editor: &Editor, text_area: Rect) -> Option<(u16, u16)> {
    let row = editor
        .cursor
        .cy
        .checked_sub(editor.viewport.offset_row)?;
    let col = editor
        .cursor
        .rx
        .checked_sub(editor.viewport.offset_col)?;
    if row < text_area.height as usize && col < text_area.width as usize {
        Some((text_area.x + col as u16, text_area.y + row as u16))
    } else {
        None
    }
}

impl TuiRenderer {
    pub fn new() -> anyhow::Result<Self> {
        let backend = CrosstermBackend::new(std::io::stdout());
        let terminal = Terminal::new(backend)?;
        Ok(Self {
            terminal,
            theme: Theme::default(),
        })
    }

    /// Draw the editor UI, scrolling first so the cursor is on screen
    pub fn draw(&mut self, editor: &mut Editor) -> anyhow::Result<()> {
        let size = self.terminal.size()?;
        editor.handle_resize(size.height, size.width);
        editor.scroll();

        let theme = &self.theme;
        self.terminal.draw(|f| {
            let (text_area, status_area, message_area) = split_screen(f.size());

            f.render_widget(EditorPane::new(editor, theme), text_area);
            f.render_widget(StatusBar::new(editor, theme), status_area);
            f.render_widget(MessageBar::new(editor, theme), message_area);

            if let Some((x, y)) = cursor_position(editor, text_area) {
                f.set_cursor(x, y);
            }
        })?;
        Ok(())
    }
}
