// ui/widgets/status_bar.rs - Status bar widget

use ratatui::{buffer::Buffer, layout::Rect, text::Line, widgets::Widget};

use crate::editor::Editor;
use crate::ui::theme::Theme;

/// Longest file name shown before truncation
const MAX_NAME_LEN: usize = 20;

/// Status bar widget showing mode, file name, line count and cursor row
pub struct StatusBar<'a> {
    pub editor: &'a Editor,
    pub theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(editor: &'a Editor, theme: &'a Theme) -> Self {
        Self { editor, theme }
    }

    fn left_text(&self) -> String {
        let name = self
            .editor
            .buffer
            .file_name()
            .unwrap_or_else(|| "[No Name]".to_string());
        let name: String = name.chars().take(MAX_NAME_LEN).collect();
        format!(
            " {} | {} - {} lines{}",
            self.editor.mode.label(),
            name,
            self.editor.buffer.row_count(),
            if self.editor.buffer.is_dirty() {
                " (modified)"
            } else {
                ""
            }
        )
    }

    fn right_text(&self) -> String {
        format!(
            "{}/{} ",
            self.editor.cursor.cy + 1,
            self.editor.buffer.row_count()
        )
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = area.width as usize;
        let mut status = self.left_text();
        let right = self.right_text();

        // Right-align the position when both halves fit
        if status.len() + right.len() <= width {
            status.push_str(&" ".repeat(width - status.len() - right.len()));
            status.push_str(&right);
        } else if status.len() < width {
            status.push_str(&" ".repeat(width - status.len()));
        }

        let line_widget = Line::from(status).style(self.theme.status_bar_style());
        buf.set_style(area, self.theme.status_bar_style());
        buf.set_line(area.x, area.y, &line_widget, area.width);
    }
}
