//! The line currently being typed.

const BACKSPACE: char = '\u{8}';

/// Single-line input buffer that never holds control characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    text: String,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Characters that drive the console rather than being typed into it.
    ///
    /// Backtick and tilde share the toggle key on most layouts.
    pub fn is_filtered(character: char) -> bool {
        matches!(
            character,
            BACKSPACE | '\n' | '\t' | '\r' | '\u{c}' | '\\' | '`' | '~'
        ) || character.is_control()
    }

    /// Apply a typed character: backspace edits, other filtered characters
    /// are dropped, everything else is appended.
    ///
    /// Returns `true` if the buffer changed.
    pub fn type_char(&mut self, character: char) -> bool {
        if character == BACKSPACE {
            return self.backspace();
        }
        if Self::is_filtered(character) {
            return false;
        }
        self.text.push(character);
        true
    }

    /// Remove the last character. Returns `false` on an empty buffer.
    pub fn backspace(&mut self) -> bool {
        self.text.pop().is_some()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Take the contents, leaving the buffer empty.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
