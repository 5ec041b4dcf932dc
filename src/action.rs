use crate::select::Key;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    FocusNext,
    FocusPrev,
    /// Keyboard input for the focused select box.
    Key(Key),
    Click { column: u16, row: u16 },
    Hover { column: u16, row: u16 },
    /// The terminal window lost focus.
    Blur,
    None,
}
