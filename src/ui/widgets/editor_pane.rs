// ui/widgets/editor_pane.rs - Editor pane widget

use ratatui::{buffer::Buffer, layout::Rect, text::Line, widgets::Widget};

use crate::editor::Editor;
use crate::ui::theme::Theme;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Editor pane widget that renders the visible slice of every row
pub struct EditorPane<'a> {
    pub editor: &'a Editor,
    pub theme: &'a Theme,
}

impl<'a> EditorPane<'a> {
    pub fn new(editor: &'a Editor, theme: &'a Theme) -> Self {
        Self { editor, theme }
    }
}

impl EditorPane<'_> {
    /// Rendered bytes of `row` clipped to `[offset_col, offset_col + width)`
    fn visible_text(&self, row: usize, width: usize) -> Option<String> {
        let render = self.editor.buffer.row(row)?.render();
        let start = self.editor.viewport.offset_col.min(render.len());
        let end = (start + width).min(render.len());
        Some(String::from_utf8_lossy(&render[start..end]).into_owned())
    }

    fn welcome_line(width: usize) -> String {
        let mut welcome = format!("Envy editor -- version {}", VERSION);
        welcome.truncate(width);
        let mut padding = (width - welcome.len()) / 2;
        let mut line = String::with_capacity(width);
        if padding > 0 {
            line.push('~');
            padding -= 1;
        }
        line.push_str(&" ".repeat(padding));
        line.push_str(&welcome);
        line
    }
}

impl Widget for EditorPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.theme.text_style());

        let width = area.width as usize;
        let row_count = self.editor.buffer.row_count();

        for y in 0..area.height {
            let file_row = self.editor.viewport.offset_row + y as usize;
            let line = match self.visible_text(file_row, width) {
                Some(text) => Line::styled(text, self.theme.text_style()),
                None if row_count == 0 && y == area.height / 3 => {
                    Line::styled(Self::welcome_line(width), self.theme.filler_style())
                }
                None => Line::styled("~", self.theme.filler_style()),
            };
            buf.set_line(area.x, area.y + y, &line, area.width);
        }
    }
}
