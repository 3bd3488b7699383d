#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    MoveFileStart,
    MoveFileEnd,
    InsertMode,
    OpenLineBelow,
    OpenLineAbove,
    NormalMode,
    InsertChar(u8),
    InsertNewline,
    DeleteChar,
    DeleteRow,
    YankRow,
    PutRow,
    Find,
    SaveFile,
    SaveAndQuit,
    Quit,
    ForceQuit,
}

impl Command {
    /// Commands that take part in the dirty-quit confirmation
    pub fn is_quit(&self) -> bool {
        matches!(self, Command::Quit | Command::ForceQuit)
    }
}
