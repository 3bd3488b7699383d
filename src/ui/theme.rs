// ui/theme.rs - Colors and styles for the editor chrome

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Default)]
pub struct Theme {
    pub general: GeneralTheme,
    pub ui: UiTheme,
}

#[derive(Debug, Clone)]
pub struct GeneralTheme {
    pub background: Color,
    pub foreground: Color,
    /// Color of the `~` markers past the end of the buffer
    pub filler: Color,
}

#[derive(Debug, Clone)]
pub struct UiTheme {
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
    pub message_fg: Color,
}

impl Default for GeneralTheme {
    fn default() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::Reset,
            filler: Color::Reset,
        }
    }
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            status_bar_bg: Color::Reset,
            status_bar_fg: Color::Reset,
            message_fg: Color::Reset,
        }
    }
}

impl Theme {
    pub fn text_style(&self) -> Style {
        Style::default()
            .fg(self.general.foreground)
            .bg(self.general.background)
    }

    pub fn filler_style(&self) -> Style {
        Style::default()
            .fg(self.general.filler)
            .bg(self.general.background)
    }

    /// Reverse video over the configured colors
    pub fn status_bar_style(&self) -> Style {
        Style::default()
            .bg(self.ui.status_bar_bg)
            .fg(self.ui.status_bar_fg)
            .add_modifier(Modifier::REVERSED)
    }

    pub fn message_style(&self) -> Style {
        Style::default()
            .fg(self.ui.message_fg)
            .bg(self.general.background)
    }
}
