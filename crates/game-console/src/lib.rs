//! # game-console
//!
//! A Quake-style drop-down developer console for real-time games: a single
//! input line, a scrollable log, a slide animation and a tiny command
//! decomposition step that splits a typed line into a message and arguments.
//!
//! ## Design Principles
//!
//! The console is **instrumented**: it never executes commands and never owns
//! the engine. The host injects a [`FontMetrics`] capability at construction,
//! lends a [`Renderer`] each frame, and posts input through a
//! [`ConsoleInput`] handle. Submitted lines are held as a pending message for
//! the host's command handler to pick up and clear.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use game_console::{Console, ConsoleAction, ConsoleKey, Viewport};
//!
//! let mut console = Console::new(config, font, Viewport::new(1280.0, 720.0));
//! let input = console.input();
//!
//! // From the host's input callbacks
//! input.post(ConsoleAction::KeyPressed(ConsoleKey::Toggle));
//! input.post(ConsoleAction::CharacterTyped('h'));
//!
//! // Once per frame
//! console.update(delta, viewport);
//! console.draw(&mut renderer);
//!
//! // Command handler
//! if !console.peek_message().is_empty() {
//!     handle(console.peek_message(), console.arguments());
//!     console.clear_message();
//! }
//! ```

pub mod action;
pub mod command;
pub mod console;
pub mod error;
pub mod event;
pub mod geometry;
pub mod input;
pub mod state;
pub mod traits;
pub mod widget;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use action::{ConsoleAction, ConsoleKey};
pub use command::{parse_line, Command, ParsedLine, ARG_PREFIX, ARG_SEPARATOR};
pub use console::Console;
pub use error::ConsoleError;
pub use event::ConsoleEvent;
pub use game_console_config::ConsoleConfig;
pub use geometry::{Color, Projection, Rect, Viewport};
pub use input::ConsoleInput;
pub use state::{
    ConsoleState, InputBuffer, ScreenMetrics, ScrollState, Visibility, VisibilityState,
};
pub use traits::{BlendMode, FontMetrics, Renderer};
pub use widget::{ConsoleStyle, ConsoleWidget, DrawCommand};
