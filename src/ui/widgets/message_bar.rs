// ui/widgets/message_bar.rs - Prompt / status message line

use ratatui::{buffer::Buffer, layout::Rect, text::Line, widgets::Widget};

use crate::editor::Editor;
use crate::ui::theme::Theme;

/// Bottom line: the active prompt, or the latest status message until it expires
pub struct MessageBar<'a> {
    pub editor: &'a Editor,
    pub theme: &'a Theme,
}

impl<'a> MessageBar<'a> {
    pub fn new(editor: &'a Editor, theme: &'a Theme) -> Self {
        Self { editor, theme }
    }
}

impl Widget for MessageBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.theme.message_style());
        if let Some(message) = self.editor.message_line() {
            let line = Line::styled(message, self.theme.message_style());
            buf.set_line(area.x, area.y, &line, area.width);
        }
    }
}
