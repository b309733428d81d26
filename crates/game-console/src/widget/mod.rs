//! Draw-instruction assembly for the console overlay.

mod console_widget;
mod draw_command;

pub use console_widget::{ConsoleStyle, ConsoleWidget};
pub use draw_command::DrawCommand;
