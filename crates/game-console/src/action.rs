//! Console Actions
//!
//! Discrete input events the host posts to the console. The host maps its
//! own key codes to these; the console drains them once per frame.

use strum::{Display, EnumString};

/// Keys the console reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum ConsoleKey {
    /// Open or close the console (edge triggered, one per press)
    Toggle,
    /// Clear the whole input line
    DeleteLine,
    /// Submit the input line
    Submit,
    /// Scroll one page towards older lines
    PageUp,
    /// Scroll one page towards newer lines
    PageDown,
    /// Jump to the oldest lines
    Home,
    /// Jump to the newest lines
    End,
}

/// Input events understood by the console.
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleAction {
    /// A character was typed. Backspace arrives as `'\u{8}'`, tab as `'\t'`.
    CharacterTyped(char),
    /// A key went down
    KeyPressed(ConsoleKey),
    /// Vertical wheel or trackpad delta; positive scrolls towards newer lines
    Scrolled(f32),
}

impl ConsoleAction {
    /// Check if this action only applies while the console is active
    pub fn requires_active(&self) -> bool {
        match self {
            ConsoleAction::KeyPressed(ConsoleKey::Toggle) => false,
            ConsoleAction::KeyPressed(_) => true,
            ConsoleAction::CharacterTyped(_) => true,
            ConsoleAction::Scrolled(_) => false,
        }
    }
}
