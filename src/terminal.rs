// terminal.rs - Raw mode and alternate screen lifetime

use crossterm::{
    cursor,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, error};

/// Puts the terminal in raw mode on the alternate screen until dropped.
///
/// Dropping the guard restores the original terminal state, including when
/// the event loop bails out with an error.
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    pub fn enter() -> std::io::Result<Self> {
        enable_raw_mode()?;
        // Built before the screen switch so a failure below still restores cooked mode
        let guard = Self { _private: () };
        execute!(std::io::stdout(), EnterAlternateScreen)?;
        debug!("terminal: raw mode on, alternate screen entered");
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = execute!(std::io::stdout(), LeaveAlternateScreen, cursor::Show) {
            error!("Failed to leave alternate screen: {}", e);
        }
        if let Err(e) = disable_raw_mode() {
            error!("Failed to disable raw mode: {}", e);
        }
        debug!("terminal: restored");
    }
}
