//! Translate terminal events into console actions
//!
//! The demo plays the role of the game's input system: it owns the raw
//! events and decides which of them the console gets to see.

use game_console::{ConsoleAction, ConsoleKey};
use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};

/// Backspace as delivered to the console's character stream
const BACKSPACE: char = '\u{8}';

/// What the host should do with a terminal event
#[derive(Debug, Clone, PartialEq)]
pub enum HostInput {
    /// Leave the demo
    Quit,
    /// Forward to the console
    Console(ConsoleAction),
    /// Window size changed; picked up on the next frame
    Resized,
}

/// Map a terminal event, if it means anything to the demo
pub fn translate(event: &Event) -> Option<HostInput> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => translate_key(key),
        Event::Mouse(mouse) => translate_mouse(mouse),
        Event::Resize(_, _) => Some(HostInput::Resized),
        _ => None,
    }
}

fn translate_key(key: &KeyEvent) -> Option<HostInput> {
    // Ctrl+C: Emergency quit - always works
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(HostInput::Quit);
    }

    let action = match key.code {
        KeyCode::Esc => return Some(HostInput::Quit),
        KeyCode::Char('`') => ConsoleAction::KeyPressed(ConsoleKey::Toggle),
        // Shortcuts belong to the host, not the input line
        KeyCode::Char(_) if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            return None
        }
        KeyCode::Char(c) => ConsoleAction::CharacterTyped(c),
        KeyCode::Backspace => ConsoleAction::CharacterTyped(BACKSPACE),
        KeyCode::Tab => ConsoleAction::CharacterTyped('\t'),
        KeyCode::Enter => ConsoleAction::KeyPressed(ConsoleKey::Submit),
        KeyCode::Delete => ConsoleAction::KeyPressed(ConsoleKey::DeleteLine),
        KeyCode::PageUp => ConsoleAction::KeyPressed(ConsoleKey::PageUp),
        KeyCode::PageDown => ConsoleAction::KeyPressed(ConsoleKey::PageDown),
        KeyCode::Home => ConsoleAction::KeyPressed(ConsoleKey::Home),
        KeyCode::End => ConsoleAction::KeyPressed(ConsoleKey::End),
        _ => return None,
    };

    Some(HostInput::Console(action))
}

fn translate_mouse(mouse: &MouseEvent) -> Option<HostInput> {
    // Positive deltas move towards newer lines, like a wheel turned down
    match mouse.kind {
        MouseEventKind::ScrollUp => Some(HostInput::Console(ConsoleAction::Scrolled(-1.0))),
        MouseEventKind::ScrollDown => Some(HostInput::Console(ConsoleAction::Scrolled(1.0))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ratatui::crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_backtick_toggles() {
        assert_eq!(
            translate(&key(KeyCode::Char('`'))),
            Some(HostInput::Console(ConsoleAction::KeyPressed(
                ConsoleKey::Toggle
            )))
        );
    }

    #[test]
    fn test_typing_and_editing() {
        assert_eq!(
            translate(&key(KeyCode::Char('x'))),
            Some(HostInput::Console(ConsoleAction::CharacterTyped('x')))
        );
        assert_eq!(
            translate(&key(KeyCode::Backspace)),
            Some(HostInput::Console(ConsoleAction::CharacterTyped(BACKSPACE)))
        );
        assert_eq!(
            translate(&key(KeyCode::Enter)),
            Some(HostInput::Console(ConsoleAction::KeyPressed(
                ConsoleKey::Submit
            )))
        );
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(translate(&key(KeyCode::Esc)), Some(HostInput::Quit));
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(translate(&ctrl_c), Some(HostInput::Quit));
    }

    #[test]
    fn test_modified_characters_are_not_typed() {
        let ctrl_a = Event::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
        let alt_x = Event::Key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT));
        let shift_a = Event::Key(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT));

        assert_eq!(translate(&ctrl_a), None);
        assert_eq!(translate(&alt_x), None);
        assert_eq!(
            translate(&shift_a),
            Some(HostInput::Console(ConsoleAction::CharacterTyped('A')))
        );
    }

    #[test]
    fn test_key_release_is_ignored() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(translate(&release), None);
    }

    #[test]
    fn test_mouse_wheel() {
        let wheel = |kind| {
            Event::Mouse(MouseEvent {
                kind,
                column: 0,
                row: 0,
                modifiers: KeyModifiers::NONE,
            })
        };
        assert_eq!(
            translate(&wheel(MouseEventKind::ScrollUp)),
            Some(HostInput::Console(ConsoleAction::Scrolled(-1.0)))
        );
        assert_eq!(
            translate(&wheel(MouseEventKind::ScrollDown)),
            Some(HostInput::Console(ConsoleAction::Scrolled(1.0)))
        );
    }
}
